/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `pinnedMessages` navigation property of a chat.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::chat_message::ChatMessage;
use crate::types::collection_response::CollectionResponse;
use crate::types::pinned_chat_message::PinnedChatMessage;
use crate::types::pinned_chat_message_request_body::PinnedChatMessageRequestBody;

impl GraphClient {
    /// Lists the messages pinned in a chat.
    pub fn list_pinned_messages(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/pinnedMessages"),
            &query.pairs(),
        )
    }

    /// Pins a message in the chat.
    pub fn pin_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        body: PinnedChatMessageRequestBody,
    ) -> Result<PinnedChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/pinnedMessages"),
            &body.into_object(),
        )
    }

    /// The number of messages pinned in a chat.
    pub fn count_pinned_messages(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/pinnedMessages/$count"),
            &query.pairs(),
        )
    }

    /// Retrieves one pinned message entry.
    pub fn get_pinned_message(
        &self,
        user_id: &str,
        chat_id: &str,
        pinned_message_id: &str,
        query: &Query,
    ) -> Result<PinnedChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let pinned_message_id = required("pinnedChatMessageInfo-id", pinned_message_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/pinnedMessages/{pinned_message_id}"),
            &query.pairs(),
        )
    }

    /// Updates one pinned message entry.
    pub fn update_pinned_message(
        &self,
        user_id: &str,
        chat_id: &str,
        pinned_message_id: &str,
        body: PinnedChatMessageRequestBody,
    ) -> Result<PinnedChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let pinned_message_id = required("pinnedChatMessageInfo-id", pinned_message_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/pinnedMessages/{pinned_message_id}"),
            &body.into_object(),
        )
    }

    /// Unpins a message from the chat.
    pub fn unpin_chat_message(
        &self,
        user_id: &str,
        chat_id: &str,
        pinned_message_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let pinned_message_id = required("pinnedChatMessageInfo-id", pinned_message_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/pinnedMessages/{pinned_message_id}"
        ))
    }

    /// Retrieves the chat message behind a pinned message entry.
    pub fn get_pinned_message_message(
        &self,
        user_id: &str,
        chat_id: &str,
        pinned_message_id: &str,
        query: &Query,
    ) -> Result<ChatMessage<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let pinned_message_id = required("pinnedChatMessageInfo-id", pinned_message_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/pinnedMessages/{pinned_message_id}/message"
            ),
            &query.pairs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GraphClient;
    use crate::error::Error;
    use crate::query::Query;
    use url::Url;

    #[test]
    fn empty_pinned_message_id_is_rejected_before_dispatch() {
        let client = GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        assert!(matches!(
            client.get_pinned_message("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("pinnedChatMessageInfo-id"))
        ));
        assert!(matches!(
            client.unpin_chat_message("u1", "c1", ""),
            Err(Error::MissingParameter("pinnedChatMessageInfo-id"))
        ));
    }
}
