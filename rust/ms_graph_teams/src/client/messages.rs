/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `messages` navigation property of a chat.

use serde_json::{Map, Value};

use crate::body::compact;
use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::chat_message::ChatMessage;
use crate::types::chat_message_request_body::ChatMessageRequestBody;
use crate::types::collection_response::CollectionResponse;

impl GraphClient {
    /// Lists the messages in a chat, most recent first.
    pub fn list_chat_messages(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages"),
            &query.pairs(),
        )
    }

    /// Sends a new message in a chat.
    pub fn create_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        body: ChatMessageRequestBody,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages"),
            &body.into_object(),
        )
    }

    /// The number of messages in a chat.
    pub fn count_chat_messages(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/messages/$count"),
            &query.pairs(),
        )
    }

    /// Invokes the `delta` function on the chat's messages. The response
    /// ends in a delta link whose token resumes the enumeration in a later
    /// call.
    pub fn delta_chat_messages(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/microsoft.graph.delta()"),
            &query.pairs(),
        )
    }

    /// Retrieves a single message from a chat.
    pub fn get_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        query: &Query,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}"),
            &query.pairs(),
        )
    }

    /// Updates a message in a chat.
    pub fn update_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        body: ChatMessageRequestBody,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}"),
            &body.into_object(),
        )
    }

    /// Deletes a message from a chat.
    pub fn delete_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}"
        ))
    }

    /// Sets a reaction on a message (`setReaction`).
    pub fn set_message_reaction(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reaction_type: Option<String>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.setReaction"
            ),
            &compact([("reactionType", reaction_type.map(Value::from))]),
        )
    }

    /// Removes a reaction from a message (`unsetReaction`).
    pub fn unset_message_reaction(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reaction_type: Option<String>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.unsetReaction"
            ),
            &compact([("reactionType", reaction_type.map(Value::from))]),
        )
    }

    /// Soft-deletes a message (`softDelete`). The message stays retrievable
    /// and carries a deletion timestamp.
    pub fn soft_delete_message(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.softDelete"
            ),
            &Map::new(),
        )
    }

    /// Undoes the soft deletion of a message (`undoSoftDelete`).
    pub fn undo_soft_delete_message(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.undoSoftDelete"
            ),
            &Map::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GraphClient;
    use crate::error::Error;
    use crate::query::Query;
    use url::Url;

    fn client() -> GraphClient {
        GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn empty_message_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_chat_message("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("chatMessage-id"))
        ));
        assert!(matches!(
            client().soft_delete_message("u1", "c1", ""),
            Err(Error::MissingParameter("chatMessage-id"))
        ));
        assert!(matches!(
            client().set_message_reaction("u1", "c1", "", Some("like".to_string())),
            Err(Error::MissingParameter("chatMessage-id"))
        ));
    }
}
