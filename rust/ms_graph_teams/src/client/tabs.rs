/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `tabs` navigation property of a chat.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::collection_response::CollectionResponse;
use crate::types::teams_app::TeamsApp;
use crate::types::teams_tab::TeamsTab;
use crate::types::teams_tab_request_body::TeamsTabRequestBody;

impl GraphClient {
    /// Lists the tabs pinned to a chat.
    pub fn list_chat_tabs(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/tabs"),
            &query.pairs(),
        )
    }

    /// Adds a tab to a chat.
    pub fn add_chat_tab(
        &self,
        user_id: &str,
        chat_id: &str,
        body: TeamsTabRequestBody,
    ) -> Result<TeamsTab<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/tabs"),
            &body.into_object(),
        )
    }

    /// The number of tabs pinned to a chat.
    pub fn count_chat_tabs(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/tabs/$count"),
            &query.pairs(),
        )
    }

    /// Retrieves one tab of a chat.
    pub fn get_chat_tab(
        &self,
        user_id: &str,
        chat_id: &str,
        tab_id: &str,
        query: &Query,
    ) -> Result<TeamsTab<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let tab_id = required("teamsTab-id", tab_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/tabs/{tab_id}"),
            &query.pairs(),
        )
    }

    /// Updates one tab of a chat.
    pub fn update_chat_tab(
        &self,
        user_id: &str,
        chat_id: &str,
        tab_id: &str,
        body: TeamsTabRequestBody,
    ) -> Result<TeamsTab<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let tab_id = required("teamsTab-id", tab_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/tabs/{tab_id}"),
            &body.into_object(),
        )
    }

    /// Removes a tab from a chat.
    pub fn remove_chat_tab(&self, user_id: &str, chat_id: &str, tab_id: &str) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let tab_id = required("teamsTab-id", tab_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/tabs/{tab_id}"
        ))
    }

    /// Retrieves the app linked to a tab.
    pub fn get_chat_tab_teams_app(
        &self,
        user_id: &str,
        chat_id: &str,
        tab_id: &str,
        query: &Query,
    ) -> Result<TeamsApp<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let tab_id = required("teamsTab-id", tab_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/tabs/{tab_id}/teamsApp"),
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
    fn empty_tab_id_is_rejected_before_dispatch() {
        let client = GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        assert!(matches!(
            client.get_chat_tab("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("teamsTab-id"))
        ));
    }
}
