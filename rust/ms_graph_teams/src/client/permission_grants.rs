/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `permissionGrants` navigation property of a chat.

use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::collection_response::CollectionResponse;
use crate::types::permission_grant_request_body::PermissionGrantRequestBody;
use crate::types::resource_specific_permission_grant::ResourceSpecificPermissionGrant;

impl GraphClient {
    /// Lists the permissions granted to apps for the chat.
    pub fn list_permission_grants(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/permissionGrants"),
            &query.pairs(),
        )
    }

    /// Creates a new permission grant on the chat.
    pub fn create_permission_grant(
        &self,
        user_id: &str,
        chat_id: &str,
        body: PermissionGrantRequestBody,
    ) -> Result<ResourceSpecificPermissionGrant<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/permissionGrants"),
            &body.into_object(),
        )
    }

    /// The number of permission grants on the chat.
    pub fn count_permission_grants(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/permissionGrants/$count"),
            &query.pairs(),
        )
    }

    /// Retrieves one permission grant.
    pub fn get_permission_grant(
        &self,
        user_id: &str,
        chat_id: &str,
        grant_id: &str,
        query: &Query,
    ) -> Result<ResourceSpecificPermissionGrant<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let grant_id = required("resourceSpecificPermissionGrant-id", grant_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/permissionGrants/{grant_id}"),
            &query.pairs(),
        )
    }

    /// Updates one permission grant.
    pub fn update_permission_grant(
        &self,
        user_id: &str,
        chat_id: &str,
        grant_id: &str,
        body: PermissionGrantRequestBody,
    ) -> Result<ResourceSpecificPermissionGrant<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let grant_id = required("resourceSpecificPermissionGrant-id", grant_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/permissionGrants/{grant_id}"),
            &body.into_object(),
        )
    }

    /// Deletes one permission grant.
    pub fn delete_permission_grant(
        &self,
        user_id: &str,
        chat_id: &str,
        grant_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let grant_id = required("resourceSpecificPermissionGrant-id", grant_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/permissionGrants/{grant_id}"
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
    fn empty_grant_id_is_rejected_before_dispatch() {
        let client = GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap());
        assert!(matches!(
            client.get_permission_grant("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("resourceSpecificPermissionGrant-id"))
        ));
    }
}
