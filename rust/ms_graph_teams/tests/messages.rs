/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Message lifecycle, reactions and soft deletion against the live mock
//! server.

mod common;

use ms_graph_teams::types::chat::ChatType;
use ms_graph_teams::types::chat_message_request_body::ChatMessageRequestBody;
use ms_graph_teams::types::chat_request_body::ChatRequestBody;
use ms_graph_teams::Query;
use serde_json::json;

fn create_chat(client: &ms_graph_teams::GraphClient) -> String {
    let chat = client
        .create_chat(
            "u1",
            ChatRequestBody {
                chat_type: Some(ChatType::Group),
                topic: Some("messages".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    chat.entity().id().unwrap().to_string()
}

#[test]
fn message_lifecycle() {
    let (client, _state) = common::start_mock();
    let chat_id = create_chat(&client);

    let message = client
        .create_chat_message(
            "u1",
            &chat_id,
            ChatMessageRequestBody {
                body: Some(json!({"contentType": "text", "content": "Hello world"})),
                ..Default::default()
            },
        )
        .unwrap();
    let message_id = message.entity().id().unwrap().to_string();
    assert_eq!(message.chat_id().unwrap(), Some(chat_id.as_str()));
    assert_eq!(message.message_type().unwrap(), Some("message"));

    let fetched = client
        .get_chat_message("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    let body = fetched.body().unwrap().unwrap();
    assert_eq!(body["content"], "Hello world");

    let updated = client
        .update_chat_message(
            "u1",
            &chat_id,
            &message_id,
            ChatMessageRequestBody {
                body: Some(json!({"contentType": "text", "content": "Edited"})),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.body().unwrap().unwrap()["content"], "Edited");

    let messages = client
        .list_chat_messages("u1", &chat_id, &Query::new())
        .unwrap();
    assert_eq!(messages.messages().unwrap().len(), 1);

    client
        .delete_chat_message("u1", &chat_id, &message_id)
        .unwrap();
    let messages = client
        .list_chat_messages("u1", &chat_id, &Query::new())
        .unwrap();
    assert!(messages.messages().unwrap().is_empty());
}

#[test]
fn reactions_set_and_unset() {
    let (client, _state) = common::start_mock();
    let chat_id = create_chat(&client);

    let message = client
        .create_chat_message(
            "u1",
            &chat_id,
            ChatMessageRequestBody {
                body: Some(json!({"contentType": "text", "content": "React to me"})),
                ..Default::default()
            },
        )
        .unwrap();
    let message_id = message.entity().id().unwrap().to_string();

    client
        .set_message_reaction("u1", &chat_id, &message_id, Some("like".to_string()))
        .unwrap();

    let fetched = client
        .get_chat_message("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    let reactions = fetched.reactions().unwrap().unwrap();
    assert_eq!(reactions.as_array().unwrap().len(), 1);
    assert_eq!(reactions[0]["reactionType"], "like");

    client
        .unset_message_reaction("u1", &chat_id, &message_id, Some("like".to_string()))
        .unwrap();

    let fetched = client
        .get_chat_message("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    let reactions = fetched.reactions().unwrap().unwrap();
    assert!(reactions.as_array().unwrap().is_empty());
}

#[test]
fn soft_delete_and_undo() {
    let (client, _state) = common::start_mock();
    let chat_id = create_chat(&client);

    let message = client
        .create_chat_message(
            "u1",
            &chat_id,
            ChatMessageRequestBody {
                body: Some(json!({"contentType": "text", "content": "Ephemeral"})),
                ..Default::default()
            },
        )
        .unwrap();
    let message_id = message.entity().id().unwrap().to_string();

    client
        .soft_delete_message("u1", &chat_id, &message_id)
        .unwrap();
    let fetched = client
        .get_chat_message("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    assert!(fetched.deleted_date_time().unwrap().is_some());

    client
        .undo_soft_delete_message("u1", &chat_id, &message_id)
        .unwrap();
    let fetched = client
        .get_chat_message("u1", &chat_id, &message_id, &Query::new())
        .unwrap();
    assert_eq!(fetched.deleted_date_time().unwrap(), None);
}
