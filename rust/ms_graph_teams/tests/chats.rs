/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Chat and member lifecycles against the live mock server.

mod common;

use ms_graph_teams::types::chat::ChatType;
use ms_graph_teams::types::chat_request_body::ChatRequestBody;
use ms_graph_teams::types::conversation_member_request_body::ConversationMemberRequestBody;
use ms_graph_teams::{CountQuery, Query};

#[test]
fn chat_crud_round_trip() {
    let (client, _state) = common::start_mock();

    let created = client
        .create_chat(
            "u1",
            ChatRequestBody {
                chat_type: Some(ChatType::Group),
                topic: Some("t".to_string()),
                is_hidden_for_all_members: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
    let chat_id = created.entity().id().unwrap().to_string();
    assert_eq!(created.topic().unwrap(), Some("t"));

    let fetched = client.get_chat("u1", &chat_id, &Query::new()).unwrap();
    assert_eq!(fetched.topic().unwrap(), Some("t"));
    assert_eq!(fetched.chat_type().unwrap(), Some(ChatType::Group));
    // An explicit `false` must survive body compaction and come back.
    assert_eq!(fetched.is_hidden_for_all_members().unwrap(), Some(false));

    let updated = client
        .update_chat(
            "u1",
            &chat_id,
            ChatRequestBody {
                topic: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.topic().unwrap(), Some("renamed"));
    assert_eq!(updated.chat_type().unwrap(), Some(ChatType::Group));

    let chats = client.list_chats("u1", &Query::new()).unwrap();
    assert_eq!(chats.chats().unwrap().len(), 1);
    assert_eq!(client.count_chats("u1", &CountQuery::new()).unwrap(), 1);

    client.delete_chat("u1", &chat_id).unwrap();
    assert!(client.get_chat("u1", &chat_id, &Query::new()).is_err());
    assert_eq!(client.count_chats("u1", &CountQuery::new()).unwrap(), 0);
}

#[test]
fn member_round_trip() {
    let (client, _state) = common::start_mock();

    let chat = client
        .create_chat(
            "u1",
            ChatRequestBody {
                chat_type: Some(ChatType::Group),
                topic: Some("members".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let chat_id = chat.entity().id().unwrap().to_string();

    let member = client
        .add_chat_member(
            "u1",
            &chat_id,
            ConversationMemberRequestBody {
                odata_type: Some("#microsoft.graph.aadUserConversationMember".to_string()),
                display_name: Some("Tony Stark".to_string()),
                roles: Some(vec!["owner".to_string()]),
                ..Default::default()
            },
        )
        .unwrap();
    let member_id = member.entity().id().unwrap().to_string();

    let members = client
        .list_chat_members("u1", &chat_id, &Query::new())
        .unwrap();
    assert_eq!(members.members().unwrap().len(), 1);

    let fetched = client
        .get_chat_member("u1", &chat_id, &member_id, &Query::new())
        .unwrap();
    assert_eq!(fetched.display_name().unwrap(), Some("Tony Stark"));
    assert_eq!(fetched.roles().unwrap(), Some(vec!["owner"]));

    client
        .remove_chat_member("u1", &chat_id, &member_id)
        .unwrap();
    let members = client
        .list_chat_members("u1", &chat_id, &Query::new())
        .unwrap();
    assert!(members.members().unwrap().is_empty());
}
