/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// Content hosted by a chat message, such as an inline image. The raw
/// content bytes live behind the `$value` media endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ChatMessageHostedContent<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> ChatMessageHostedContent<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ChatMessageHostedContent {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// Write-only. When posting new chat message hosted content, carries the
    /// base64-encoded bytes of the content.
    pub fn content_bytes(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "contentBytes")
    }

    /// Write-only. The media type of the content, e.g. `image/png`.
    pub fn content_type(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "contentType")
    }
}
