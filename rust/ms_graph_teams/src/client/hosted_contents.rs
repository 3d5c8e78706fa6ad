/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `hostedContents` navigation property of chat messages
//! and their replies.
//!
//! Hosted content comes in two representations: a JSON resource carrying
//! metadata (and base64 content on write), and a `$value` media endpoint
//! carrying the raw bytes.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::chat_message_hosted_content::ChatMessageHostedContent;
use crate::types::collection_response::CollectionResponse;
use crate::types::hosted_content_request_body::HostedContentRequestBody;

impl GraphClient {
    /// Lists the contents hosted by a chat message.
    pub fn list_message_hosted_contents(
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
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents"),
            &query.pairs(),
        )
    }

    /// Attaches new hosted content to a chat message.
    pub fn create_message_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        body: HostedContentRequestBody,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents"),
            &body.into_object(),
        )
    }

    /// The number of contents hosted by a chat message.
    pub fn count_message_hosted_contents(
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
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/$count"
            ),
            &query.pairs(),
        )
    }

    /// Retrieves the metadata of one hosted content.
    pub fn get_message_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
        query: &Query,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}"
            ),
            &query.pairs(),
        )
    }

    /// Updates the metadata of one hosted content.
    pub fn update_message_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
        body: HostedContentRequestBody,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.patch_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}"
            ),
            &body.into_object(),
        )
    }

    /// Detaches one hosted content from a chat message.
    pub fn delete_message_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}"
        ))
    }

    /// Downloads the raw bytes of one hosted content (`$value`).
    pub fn get_message_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
    ) -> Result<Vec<u8>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.get_bytes(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}/$value"
        ))
    }

    /// Uploads the raw bytes of one hosted content (`$value`). The payload
    /// goes out as `application/octet-stream`.
    pub fn upload_message_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
        content: &[u8],
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.put_bytes(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}/$value"
            ),
            content,
        )
    }

    /// Deletes the raw bytes of one hosted content (`$value`).
    pub fn delete_message_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        hosted_content_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}/$value"
        ))
    }

    /// Lists the contents hosted by a reply.
    pub fn list_reply_hosted_contents(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents"
            ),
            &query.pairs(),
        )
    }

    /// Attaches new hosted content to a reply.
    pub fn create_reply_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        body: HostedContentRequestBody,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.post_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents"
            ),
            &body.into_object(),
        )
    }

    /// The number of contents hosted by a reply.
    pub fn count_reply_hosted_contents(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        self.get_count(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/$count"
            ),
            &query.pairs(),
        )
    }

    /// Retrieves the metadata of one hosted content of a reply.
    pub fn get_reply_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
        query: &Query,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}"
            ),
            &query.pairs(),
        )
    }

    /// Updates the metadata of one hosted content of a reply.
    pub fn update_reply_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
        body: HostedContentRequestBody,
    ) -> Result<ChatMessageHostedContent<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.patch_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}"
            ),
            &body.into_object(),
        )
    }

    /// Detaches one hosted content from a reply.
    pub fn delete_reply_hosted_content(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}"
        ))
    }

    /// Downloads the raw bytes of one hosted content of a reply (`$value`).
    pub fn get_reply_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
    ) -> Result<Vec<u8>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.get_bytes(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}/$value"
        ))
    }

    /// Uploads the raw bytes of one hosted content of a reply (`$value`).
    pub fn upload_reply_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
        content: &[u8],
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.put_bytes(
            &format!(
                "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}/$value"
            ),
            content,
        )
    }

    /// Deletes the raw bytes of one hosted content of a reply (`$value`).
    pub fn delete_reply_hosted_content_value(
        &self,
        user_id: &str,
        chat_id: &str,
        message_id: &str,
        reply_id: &str,
        hosted_content_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let message_id = required("chatMessage-id", message_id)?;
        let reply_id = required("chatMessage-id1", reply_id)?;
        let hosted_content_id = required("chatMessageHostedContent-id", hosted_content_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/replies/{reply_id}/hostedContents/{hosted_content_id}/$value"
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GraphClient;
    use crate::error::Error;
    use url::Url;

    fn client() -> GraphClient {
        GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn empty_hosted_content_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_message_hosted_content_value("u1", "c1", "m1", ""),
            Err(Error::MissingParameter("chatMessageHostedContent-id"))
        ));
        assert!(matches!(
            client().upload_reply_hosted_content_value("u1", "c1", "m1", "r1", "", b"x"),
            Err(Error::MissingParameter("chatMessageHostedContent-id"))
        ));
    }
}
