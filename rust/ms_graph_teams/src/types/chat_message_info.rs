/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// A preview of a chat message, as exposed through a chat's
/// `lastMessagePreview` navigation property.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ChatMessageInfo<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> ChatMessageInfo<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ChatMessageInfo {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// Body of the message preview. Only the first 110 characters of the
    /// original message body are carried over.
    pub fn body(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "body")
    }

    /// Date and time at which the original message was created.
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "createdDateTime")
    }

    /// If a message was deleted for all users of the chat, this is `true`.
    pub fn is_deleted(&self) -> Result<Option<bool>, Error> {
        prop::boolean(&self.properties, "isDeleted")
    }

    /// The type of the original chat message.
    pub fn message_type(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "messageType")
    }

    /// Details of the sender of the original message.
    pub fn from(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "from")
    }

    /// If the original message was a system event, this carries the event
    /// details.
    pub fn event_detail(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "eventDetail")
    }
}
