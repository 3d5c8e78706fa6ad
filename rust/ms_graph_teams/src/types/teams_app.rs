/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// An app catalogued in the Microsoft Teams app store.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamsApp<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> TeamsApp<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        TeamsApp {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The ID of the catalog provided by the app developer in the Microsoft
    /// Teams zip app package.
    pub fn external_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "externalId")
    }

    /// The name of the catalog app provided by the app developer.
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "displayName")
    }

    /// The method of distribution for the app, e.g. `store` or
    /// `organization`.
    pub fn distribution_method(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "distributionMethod")
    }
}
