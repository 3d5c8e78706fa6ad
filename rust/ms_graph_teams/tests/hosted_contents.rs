/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Hosted content metadata and `$value` byte fidelity against the live
//! mock server.

mod common;

use ms_graph_teams::types::chat::ChatType;
use ms_graph_teams::types::chat_message_request_body::ChatMessageRequestBody;
use ms_graph_teams::types::chat_request_body::ChatRequestBody;
use ms_graph_teams::types::hosted_content_request_body::HostedContentRequestBody;
use ms_graph_teams::Query;
use serde_json::json;

#[test]
fn hosted_content_value_round_trip() {
    let (client, state) = common::start_mock();

    let chat = client
        .create_chat(
            "u1",
            ChatRequestBody {
                chat_type: Some(ChatType::Group),
                topic: Some("hosted".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let chat_id = chat.entity().id().unwrap().to_string();

    let message = client
        .create_chat_message(
            "u1",
            &chat_id,
            ChatMessageRequestBody {
                body: Some(json!({
                    "contentType": "html",
                    "content": "<img src=\"../hostedContents/1/$value\">",
                })),
                ..Default::default()
            },
        )
        .unwrap();
    let message_id = message.entity().id().unwrap().to_string();

    let hosted = client
        .create_message_hosted_content(
            "u1",
            &chat_id,
            &message_id,
            HostedContentRequestBody {
                content_type: Some("image/png".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let hosted_content_id = hosted.entity().id().unwrap().to_string();
    assert_eq!(hosted.content_type().unwrap(), Some("image/png"));

    let listed = client
        .list_message_hosted_contents("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    assert_eq!(listed.hosted_contents().unwrap().len(), 1);

    // Not valid PNG data, but the bytes must come back untouched either way.
    let payload: &[u8] = &[0x89, b'P', b'N', b'G', 0x00, 0xFF, 0x7F, 0x01];
    client
        .upload_message_hosted_content_value("u1", &chat_id, &message_id, &hosted_content_id, payload)
        .unwrap();

    // The upload must have gone out as a raw octet stream.
    assert_eq!(
        state.upload_content_types(),
        vec!["application/octet-stream".to_string()]
    );

    let downloaded = client
        .get_message_hosted_content_value("u1", &chat_id, &message_id, &hosted_content_id)
        .unwrap();
    assert_eq!(downloaded, payload);

    client
        .delete_message_hosted_content_value("u1", &chat_id, &message_id, &hosted_content_id)
        .unwrap();
    let downloaded = client
        .get_message_hosted_content_value("u1", &chat_id, &message_id, &hosted_content_id)
        .unwrap();
    assert!(downloaded.is_empty());
}
