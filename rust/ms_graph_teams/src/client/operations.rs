/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Read-only operations on the `operations` navigation property of a chat.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::collection_response::CollectionResponse;
use crate::types::teams_async_operation::TeamsAsyncOperation;

impl GraphClient {
    /// Lists the async operations that ran or are running on the chat.
    pub fn list_chat_operations(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/operations"),
            &query.pairs(),
        )
    }

    /// The number of async operations on the chat.
    pub fn count_chat_operations(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/operations/$count"),
            &query.pairs(),
        )
    }

    /// Retrieves one async operation.
    pub fn get_chat_operation(
        &self,
        user_id: &str,
        chat_id: &str,
        operation_id: &str,
        query: &Query,
    ) -> Result<TeamsAsyncOperation<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let operation_id = required("teamsAsyncOperation-id", operation_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/operations/{operation_id}"),
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
    fn empty_operation_id_is_rejected_before_dispatch() {
        let client = GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        assert!(matches!(
            client.get_chat_operation("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("teamsAsyncOperation-id"))
        ));
    }
}
