/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `lastMessagePreview` navigation property of a chat.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::Query;
use crate::types::chat_message_info::ChatMessageInfo;
use crate::types::chat_message_info_request_body::ChatMessageInfoRequestBody;

impl GraphClient {
    /// Retrieves a preview of the last message sent in a chat.
    pub fn get_last_message_preview(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<ChatMessageInfo<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/lastMessagePreview"),
            &query.pairs(),
        )
    }

    /// Updates the last message preview of a chat.
    pub fn update_last_message_preview(
        &self,
        user_id: &str,
        chat_id: &str,
        body: ChatMessageInfoRequestBody,
    ) -> Result<ChatMessageInfo<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/lastMessagePreview"),
            &body.into_object(),
        )
    }

    /// Deletes the last message preview of a chat.
    pub fn delete_last_message_preview(&self, user_id: &str, chat_id: &str) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/lastMessagePreview"
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GraphClient;
    use crate::error::Error;
    use crate::query::Query;
    use url::Url;

    #[test]
    fn empty_chat_id_is_rejected_before_dispatch() {
        let client = GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        assert!(matches!(
            client.get_last_message_preview("u1", "", &Query::new()),
            Err(Error::MissingParameter("chat-id"))
        ));
    }
}
