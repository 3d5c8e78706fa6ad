/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Operations on the `installedApps` navigation property of a chat.

use serde_json::Value;

use crate::body::compact;
use crate::client::{required, GraphClient};
use crate::error::Result;
use crate::query::{CountQuery, Query};
use crate::types::collection_response::CollectionResponse;
use crate::types::teams_app::TeamsApp;
use crate::types::teams_app_definition::TeamsAppDefinition;
use crate::types::teams_app_installation::TeamsAppInstallation;
use crate::types::teams_app_installation_request_body::TeamsAppInstallationRequestBody;

impl GraphClient {
    /// Lists the apps installed in a chat.
    pub fn list_installed_apps(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &Query,
    ) -> Result<CollectionResponse<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/installedApps"),
            &query.pairs(),
        )
    }

    /// Installs an app in a chat.
    pub fn install_app_in_chat(
        &self,
        user_id: &str,
        chat_id: &str,
        body: TeamsAppInstallationRequestBody,
    ) -> Result<TeamsAppInstallation<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.post_json(
            &format!("/users/{user_id}/chats/{chat_id}/installedApps"),
            &body.into_object(),
        )
    }

    /// The number of apps installed in a chat.
    pub fn count_installed_apps(
        &self,
        user_id: &str,
        chat_id: &str,
        query: &CountQuery,
    ) -> Result<i64> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        self.get_count(
            &format!("/users/{user_id}/chats/{chat_id}/installedApps/$count"),
            &query.pairs(),
        )
    }

    /// Retrieves one app installation in a chat.
    pub fn get_installed_app(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
        query: &Query,
    ) -> Result<TeamsAppInstallation<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.get_json(
            &format!("/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}"),
            &query.pairs(),
        )
    }

    /// Updates one app installation in a chat.
    pub fn update_installed_app(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
        body: TeamsAppInstallationRequestBody,
    ) -> Result<TeamsAppInstallation<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.patch_json(
            &format!("/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}"),
            &body.into_object(),
        )
    }

    /// Uninstalls an app from a chat.
    pub fn uninstall_app_from_chat(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.delete(&format!(
            "/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}"
        ))
    }

    /// Upgrades an installed app to the latest version (`upgrade`),
    /// optionally consenting to the permissions the new version requires.
    pub fn upgrade_installed_app(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
        consented_permission_set: Option<Value>,
    ) -> Result<()> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.post_empty(
            &format!(
                "/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}/microsoft.graph.upgrade"
            ),
            &compact([("consentedPermissionSet", consented_permission_set)]),
        )
    }

    /// Retrieves the catalog app backing an installation.
    pub fn get_installed_app_teams_app(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
        query: &Query,
    ) -> Result<TeamsApp<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}/teamsApp"
            ),
            &query.pairs(),
        )
    }

    /// Retrieves the definition of the installed version of an app.
    pub fn get_installed_app_teams_app_definition(
        &self,
        user_id: &str,
        chat_id: &str,
        installation_id: &str,
        query: &Query,
    ) -> Result<TeamsAppDefinition<'static>> {
        let user_id = required("user-id", user_id)?;
        let chat_id = required("chat-id", chat_id)?;
        let installation_id = required("teamsAppInstallation-id", installation_id)?;
        self.get_json(
            &format!(
                "/users/{user_id}/chats/{chat_id}/installedApps/{installation_id}/teamsAppDefinition"
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

    fn client() -> GraphClient {
        GraphClient::new(Url::parse("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn empty_installation_id_is_rejected_before_dispatch() {
        assert!(matches!(
            client().get_installed_app("u1", "c1", "", &Query::new()),
            Err(Error::MissingParameter("teamsAppInstallation-id"))
        ));
        assert!(matches!(
            client().upgrade_installed_app("u1", "c1", "", None),
            Err(Error::MissingParameter("teamsAppInstallation-id"))
        ));
    }
}
