/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// A user in a chat.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ConversationMember<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> ConversationMember<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ConversationMember {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The display name of the user.
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "displayName")
    }

    /// The roles for that user, e.g. `owner` or `guest`.
    pub fn roles(&self) -> Result<Option<Vec<&str>>, Error> {
        prop::strings(&self.properties, "roles")
    }

    /// The timestamp denoting how far back a conversation's history is
    /// shared with the conversation member.
    pub fn visible_history_start_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "visibleHistoryStartDateTime")
    }
}

#[cfg(test)]
mod tests {
    use super::ConversationMember;

    #[test]
    fn deserialize_conversation_member() {
        let json = r##"{
    "@odata.type": "#microsoft.graph.aadUserConversationMember",
    "id": "MCMjMjQzMmI1N2ItMGFiZC00M2RiLWFhN2It",
    "roles": ["owner"],
    "displayName": "Tony Stark",
    "visibleHistoryStartDateTime": "0001-01-01T00:00:00Z",
    "userId": "4595d2f2-7b31-446c-84fd-9b795e63114b",
    "email": "starkt@teamsgraph.onmicrosoft.com"
}"##;

        let member: ConversationMember<'_> = serde_json::from_str(json).unwrap();
        assert_eq!(member.display_name().unwrap(), Some("Tony Stark"));
        assert_eq!(member.roles().unwrap(), Some(vec!["owner"]));
    }
}
