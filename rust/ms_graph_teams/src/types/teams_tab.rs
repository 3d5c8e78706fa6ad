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

/// A tab pinned to a chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamsTab<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> TeamsTab<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        TeamsTab {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// Name of the tab.
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "displayName")
    }

    /// Deep link URL of the tab instance. Read-only.
    pub fn web_url(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "webUrl")
    }

    /// Container for custom settings applied to the tab.
    pub fn configuration(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "configuration")
    }

    /// The application that is linked to the tab, when the `teamsApp`
    /// navigation property was expanded.
    pub fn teams_app(&'a self) -> Result<Option<TeamsApp<'a>>, Error> {
        Ok(prop::object(&self.properties, "teamsApp")?.map(TeamsApp::new))
    }
}
