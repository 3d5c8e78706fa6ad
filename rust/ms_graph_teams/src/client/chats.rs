/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on `/users/{user-id}/chats` and the chat-level Graph actions
//! and functions.

use serde_json::Value;

use crate::body::compact;
use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::activity_notification_request_body::ActivityNotificationRequestBody;
use crate::types::chat::Chat;
use crate::types::chat_request_body::ChatRequestBody;
use crate::types::collection_response::CollectionResponse;

impl GraphClient {
    /// Lists the chats the given user is a participant of.
    pub fn list_chats(&self, user_id: &str, query: &Query) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        self.get_json(&format!("/users/{user_id}/chats"), &query.pairs())
    }

    /// Creates a new chat.
    pub fn create_chat(&self, user_id: &str, body: ChatRequestBody) -> Result<Chat<'static>> {
        let user_id = required("user-id", user_id)?;
        self.post_json(&format!("/users/{user_id}/chats"), &body.into_object())
    }

    /// The number of chats of the given user.
    pub fn count_chats(&self, user_id: &str, query: &CountQuery) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        self.get_count(&format!("/users/{user_id}/chats/$count"), &query.pairs())
    }

    /// Invokes the `getAllMessages` function, which returns the messages
    /// from all chats the user is a participant of. `model` selects the
    /// licensing and payment model.
    pub fn get_all_messages(
        &self,
        user_id: &str,
        model: Option<&str>,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let mut params = query.pairs();
        if let Some(model) = model {
            params.push(("model", model.to_string()));
        }
        self.get_json(
            &format!("/users/{user_id}/chats/microsoft.graph.getAllMessages()"),
            &params,
        )
    }

    /// Invokes the `getAllRetainedMessages` function, which returns the
    /// retained messages from all chats the user is a participant of.
    pub fn get_all_retained_messages(
        &self,
        user_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/microsoft.graph.getAllRetainedMessages()"),
            &query.pairs(),
        )
    }

    /// Retrieves a single chat.
    pub fn get_chat(&self, user_id: &str, chat_id: &str, query: &Query) -> Result<Chat<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(&format!("/users/{user_id}/chats/{chat_id}"), &query.pairs())
    }

    /// Updates the properties of a chat.
    pub fn update_chat(
        &self,
        user_id: &str,
        chat_id: &str,
        body: ChatRequestBody,
    ) -> Result<Chat<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}"),
            &body.into_object(),
        )
    }

    /// Deletes a chat.
    pub fn delete_chat(&self, user_id: &str, chat_id: &str) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.delete(&format!("/users/{user_id}/chats/{chat_id}"))
    }

    /// Hides the chat for the given user (`hideForUser`). The chat shows up
    /// again on the next message.
    pub fn hide_chat_for_user(
        &self,
        user_id: &str,
        chat_id: &str,
        user: Option<Value>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!("/users/{user_id}/chats/{chat_id}/microsoft.graph.hideForUser"),
            &compact([("user", user)]),
        )
    }

    /// Unhides a previously hidden chat for the given user
    /// (`unhideForUser`).
    pub fn unhide_chat_for_user(
        &self,
        user_id: &str,
        chat_id: &str,
        user: Option<Value>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!("/users/{user_id}/chats/{chat_id}/microsoft.graph.unhideForUser"),
            &compact([("user", user)]),
        )
    }

    /// Marks the chat as read for the given user (`markChatReadForUser`).
    pub fn mark_chat_read_for_user(
        &self,
        user_id: &str,
        chat_id: &str,
        user: Option<Value>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!("/users/{user_id}/chats/{chat_id}/microsoft.graph.markChatReadForUser"),
            &compact([("user", user)]),
        )
    }

    /// Marks the chat as unread for the given user
    /// (`markChatUnreadForUser`), optionally rewinding the read position to
    /// `last_message_read_date_time`.
    pub fn mark_chat_unread_for_user(
        &self,
        user_id: &str,
        chat_id: &str,
        user: Option<Value>,
        last_message_read_date_time: Option<String>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!("/users/{user_id}/chats/{chat_id}/microsoft.graph.markChatUnreadForUser"),
            &compact([
                ("user", user),
                (
                    "lastMessageReadDateTime",
                    last_message_read_date_time.map(Value::from),
                ),
            ]),
        )
    }

    /// Removes all access the given user has to the chat
    /// (`removeAllAccessForUser`).
    pub fn remove_all_access_for_user(
        &self,
        user_id: &str,
        chat_id: &str,
        user: Option<Value>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!("/users/{user_id}/chats/{chat_id}/microsoft.graph.removeAllAccessForUser"),
            &compact([("user", user)]),
        )
    }

    /// Sends an activity feed notification scoped to the chat
    /// (`sendActivityNotification`).
    pub fn send_activity_notification(
        &self,
        user_id: &str,
        chat_id: &str,
        body: ActivityNotificationRequestBody,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/microsoft.graph.sendActivityNotification"
            ),
            &body.into_object(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GraphClient;
    use crate::error::Error;
    use crate::query::Query;
    use crate::types::chat_request_body::ChatRequestBody;
    use url::Url;

    fn client() -> GraphClient {
        GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn empty_user_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().list_chats("", &Query::new()),
            Err(Error::MissingParameter("user-id"))
        ));
        assert!(matches!(
            client().create_chat("", ChatRequestBody::default()),
            Err(Error::MissingParameter("user-id"))
        ));
    }

    #[test]
    fn empty_chat_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_chat("u1", "", &Query::new()),
            Err(Error::MissingParameter("chat-id"))
        ));
        assert!(matches!(
            client().delete_chat("u1", ""),
            Err(Error::MissingParameter("chat-id"))
        ));
        assert!(matches!(
            client().hide_chat_for_user("u1", "", None),
            Err(Error::MissingParameter("chat-id"))
        ));
    }

    #[test]
    fn parameters_are_validated_in_path_order() {
        assert!(matches!(
            client().get_chat("", "", &Query::new()),
            Err(Error::MissingParameter("user-id"))
        ));
    }
}
