/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `members` navigation property of a chat.

use serde_json::Value;

use crate::body::compact;
use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::collection_response::CollectionResponse;
use crate::types::conversation_member::ConversationMember;
use crate::types::conversation_member_request_body::ConversationMemberRequestBody;

impl GraphClient {
    /// Lists the members of a chat.
    pub fn list_chat_members(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/members"),
            &query.pairs(),
        )
    }

    /// Adds a single member to a chat.
    pub fn add_chat_member(
        &self,
        user_id: &str,
        chat_id: &str,
        body: ConversationMemberRequestBody,
    ) -> Result<ConversationMember<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/members"),
            &body.into_object(),
        )
    }

    /// The number of members in a chat.
    pub fn count_chat_members(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/members/$count"),
            &query.pairs(),
        )
    }

    /// Adds multiple members to a chat in one action (`members/add`). Each
    /// entry of `values` is a conversation member object; the response
    /// carries one action result part per entry.
    pub fn add_chat_members(
        &self,
        user_id: &str,
        chat_id: &str,
        values: Option<Value>,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/members/microsoft.graph.add"),
            &compact([("values", values)]),
        )
    }

    /// Removes multiple members from a chat in one action
    /// (`members/remove`).
    pub fn remove_chat_members(
        &self,
        user_id: &str,
        chat_id: &str,
        values: Option<Value>,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/members/microsoft.graph.remove"),
            &compact([("values", values)]),
        )
    }

    /// Retrieves a single member of a chat.
    pub fn get_chat_member(
        &self,
        user_id: &str,
        chat_id: &str,
        member_id: &str,
        query: &Query,
    ) -> Result<ConversationMember<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let member_id = required("conversationMember-id", member_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/members/{member_id}"),
            &query.pairs(),
        )
    }

    /// Updates a member of a chat, e.g. to change their roles.
    pub fn update_chat_member(
        &self,
        user_id: &str,
        chat_id: &str,
        member_id: &str,
        body: ConversationMemberRequestBody,
    ) -> Result<ConversationMember<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let member_id = required("conversationMember-id", member_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/members/{member_id}"),
            &body.into_object(),
        )
    }

    /// Removes a member from a chat.
    pub fn remove_chat_member(
        &self,
        user_id: &str,
        chat_id: &str,
        member_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let member_id = required("conversationMember-id", member_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/members/{member_id}"
        ))
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
    fn empty_member_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_chat_member("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("conversationMember-id"))
        ));
        assert!(matches!(
            client().remove_chat_member("u1", "c1", ""),
            Err(Error::MissingParameter("conversationMember-id"))
        ));
    }
}
