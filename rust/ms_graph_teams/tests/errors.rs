/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Error surfacing: local parameter validation keeps requests off the
//! wire, and remote failures come back with their status and body.

mod common;

use ms_graph_teams::{Error, Query};

#[test]
fn missing_parameters_send_nothing() {
    let (client, state) = common::start_mock();

    assert!(matches!(
        client.get_chat("", "c1", &Query::new()),
        Err(Error::MissingParameter("user-id"))
    ));
    assert!(matches!(
        client.list_chat_messages("u1", "", &Query::new()),
        Err(Error::MissingParameter("chat-id"))
    ));
    assert!(matches!(
        client.get_message_hosted_content_value("u1", "c1", "m1", ""),
        Err(Error::MissingParameter("chatMessageHostedContent-id"))
    ));

    assert_eq!(state.request_count(), 0);
}

#[test]
fn remote_failure_carries_status_and_body() {
    let (client, state) = common::start_mock();

    let err = client
        .get_chat("u1", "no-such-chat", &Query::new())
        .unwrap_err();

    match err {
        Error::Http(graph_http::Error::StatusCode { status, response }) => {
            assert_eq!(status.as_u16(), 404);
            let body = String::from_utf8_lossy(response.body());
            assert!(body.contains("NotFound"), "unexpected body: {body}");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    assert_eq!(state.request_count(), 1);
}

#[test]
fn remote_failure_surfaces_for_writes_too() {
    let (client, state) = common::start_mock();

    let err = client.delete_chat("u1", "no-such-chat").unwrap_err();
    match err {
        Error::Http(graph_http::Error::StatusCode { status, .. }) => {
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected status error, got {other:?}"),
    }

    assert_eq!(state.request_count(), 1);
}
