/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// A permission granted to a specific application for a specific resource,
/// such as a chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ResourceSpecificPermissionGrant<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> ResourceSpecificPermissionGrant<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ResourceSpecificPermissionGrant {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// ID of the service principal of the Microsoft Entra app that has been
    /// granted access. Read-only.
    pub fn client_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "clientId")
    }

    /// ID of the Microsoft Entra app that has been granted access.
    /// Read-only.
    pub fn client_app_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "clientAppId")
    }

    /// ID of the Microsoft Entra app that is hosting the resource.
    /// Read-only.
    pub fn resource_app_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "resourceAppId")
    }

    /// The name of the resource-specific permission. Read-only.
    pub fn permission(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "permission")
    }

    /// The type of permission, e.g. `Application`. Read-only.
    pub fn permission_type(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "permissionType")
    }
}
