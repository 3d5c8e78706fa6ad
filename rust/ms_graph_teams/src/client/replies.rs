/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `replies` navigation property of a chat message.
//!
//! Replies are chat messages themselves; the reply's own identifier is the
//! second `chatMessage-id` in the path, which the API spells
//! `chatMessage-id1`.

use serde_json::{Map, Value};

use crate::body::compact;
use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::chat_message::ChatMessage;
use crate::types::chat_message_request_body::ChatMessageRequestBody;
use crate::types::collection_response::CollectionResponse;

impl GraphClient {
    /// Lists the replies to a chat message.
    pub fn list_message_replies(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies"),
            &query.pairs(),
        )
    }

    /// Sends a reply to a chat message.
    pub fn create_message_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        body: ChatMessageRequestBody,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies"),
            &body.into_object(),
        )
    }

    /// The number of replies to a chat message.
    pub fn count_message_replies(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/$count"),
            &query.pairs(),
        )
    }

    /// Invokes the `delta` function on a message's replies.
    pub fn delta_message_replies(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/microsoft.graph.delta()"
            ),
            &query.pairs(),
        )
    }

    /// Retrieves a single reply to a chat message.
    pub fn get_message_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        query: &Query,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}"),
            &query.pairs(),
        )
    }

    /// Updates a reply to a chat message.
    pub fn update_message_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        body: ChatMessageRequestBody,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}"),
            &body.into_object(),
        )
    }

    /// Deletes a reply to a chat message.
    pub fn delete_message_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}"
        ))
    }

    /// Sets a reaction on a reply (`setReaction`).
    pub fn set_reply_reaction(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        reaction_type: Option<String>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/microsoft.graph.setReaction"
            ),
            &compact([("reactionType", reaction_type.map(Value::from))]),
        )
    }

    /// Removes a reaction from a reply (`unsetReaction`).
    pub fn unset_reply_reaction(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        reaction_type: Option<String>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/microsoft.graph.unsetReaction"
            ),
            &compact([("reactionType", reaction_type.map(Value::from))]),
        )
    }

    /// Soft-deletes a reply (`softDelete`).
    pub fn soft_delete_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/microsoft.graph.softDelete"
            ),
            &Map::new(),
        )
    }

    /// Undoes the soft deletion of a reply (`undoSoftDelete`).
    pub fn undo_soft_delete_reply(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/microsoft.graph.undoSoftDelete"
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
    fn empty_reply_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_message_reply("u1", "c1", "m1", "", &Query::new()),
            Err(Error::MissingParameter("chatMessage-id1"))
        ));
        assert!(matches!(
            client().undo_soft_delete_reply("u1", "c1", "m1", ""),
            Err(Error::MissingParameter("chatMessage-id1"))
        ));
    }

    #[test]
    fn parent_message_id_is_validated_first() {
        assert!(matches!(
            client().get_message_reply("u1", "c1", "", "", &Query::new()),
            Err(Error::MissingParameter("chatMessage-id"))
        ));
    }
}
