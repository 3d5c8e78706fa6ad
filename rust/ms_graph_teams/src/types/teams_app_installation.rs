/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;
use crate::types::teams_app::TeamsApp;
use crate::types::teams_app_definition::TeamsAppDefinition;

/// An installation of a Teams app in a chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamsAppInstallation<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> TeamsAppInstallation<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        TeamsAppInstallation {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The set of resource-specific permissions consented to while
    /// installing or upgrading the app.
    pub fn consented_permission_set(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "consentedPermissionSet")
    }

    /// The app that is installed, when the `teamsApp` navigation property
    /// was expanded.
    pub fn teams_app(&'a self) -> Result<Option<TeamsApp<'a>>, Error> {
        Ok(prop::object(&self.properties, "teamsApp")?.map(TeamsApp::new))
    }

    /// The details of the installed version of the app, when the
    /// `teamsAppDefinition` navigation property was expanded.
    pub fn teams_app_definition(&'a self) -> Result<Option<TeamsAppDefinition<'a>>, Error> {
        Ok(prop::object(&self.properties, "teamsAppDefinition")?.map(TeamsAppDefinition::new))
    }
}

#[cfg(test)]
mod tests {
    use super::TeamsAppInstallation;

    #[test]
    fn expanded_navigation_properties_get_typed_views() {
        let json = r#"{
    "id": "NjkwOTQ4MmMtNTM3YS00MjA1LTkwYTUt",
    "consentedPermissionSet": null,
    "teamsApp": {
        "id": "d72ff4ba-f8d2-4fb2-b2f8-8a6e55fb4b05",
        "externalId": null,
        "displayName": "Map Pro",
        "distributionMethod": "store"
    }
}"#;

        let installation: TeamsAppInstallation<'_> = serde_json::from_str(json).unwrap();
        let app = installation.teams_app().unwrap().unwrap();
        assert_eq!(app.display_name().unwrap(), Some("Map Pro"));
        assert_eq!(installation.consented_permission_set().unwrap(), None);
    }
}
