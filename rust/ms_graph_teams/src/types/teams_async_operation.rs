/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// A long-running Teams operation, e.g. the archival of a large chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamsAsyncOperation<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> TeamsAsyncOperation<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        TeamsAsyncOperation {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// Denotes which type of operation is being described.
    pub fn operation_type(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "operationType")
    }

    /// Operation status, e.g. `inProgress` or `succeeded`.
    pub fn status(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "status")
    }

    /// Time when the operation was created.
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "createdDateTime")
    }

    /// Time when the async operation was last updated.
    pub fn last_action_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "lastActionDateTime")
    }

    /// Number of times the operation was attempted before being marked
    /// successful or failed.
    pub fn attempts_count(&self) -> Result<Option<i64>, Error> {
        prop::integer(&self.properties, "attemptsCount")
    }

    /// Any error that causes the async operation to fail.
    pub fn error(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "error")
    }

    /// The ID of the object that is created or modified as result of this
    /// async operation, typically a team.
    pub fn target_resource_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "targetResourceId")
    }

    /// The location of the object that is created or modified as result of
    /// this async operation.
    pub fn target_resource_location(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "targetResourceLocation")
    }
}
