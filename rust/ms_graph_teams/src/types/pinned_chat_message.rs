/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::chat_message::ChatMessage;
use crate::types::entity::Entity;
use crate::types::prop;

/// A message pinned in a chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PinnedChatMessage<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> PinnedChatMessage<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        PinnedChatMessage {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The chat message that is pinned, when the `message` navigation
    /// property was expanded.
    pub fn message(&'a self) -> Result<Option<ChatMessage<'a>>, Error> {
        Ok(prop::object(&self.properties, "message")?.map(ChatMessage::new))
    }
}
