/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// The details of one version of a Teams app.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamsAppDefinition<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> TeamsAppDefinition<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        TeamsAppDefinition {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The ID from the Teams app manifest.
    pub fn teams_app_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "teamsAppId")
    }

    /// The name of the app provided by the app developer.
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "displayName")
    }

    /// The version number of the application.
    pub fn version(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "version")
    }

    /// The published status of a specific version of a Teams app.
    pub fn publishing_state(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "publishingState")
    }

    /// Verbose description of the application.
    pub fn description(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "description")
    }

    /// Short description of the application.
    pub fn short_description(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "shortDescription")
    }
}
