/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::{Display, EnumString};

use crate::error::Error;
use crate::types::entity::Entity;
use crate::types::prop;

/// The kind of a chat.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum ChatType {
    OneOnOne,
    Group,
    Meeting,
    UnknownFutureValue,
}

/// A chat between one or more participants.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Chat<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> Chat<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Chat {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// Specifies the type of chat.
    pub fn chat_type(&self) -> Result<Option<ChatType>, Error> {
        match prop::string(&self.properties, "chatType")? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| Error::UnexpectedResponse(raw.to_string())),
            None => Ok(None),
        }
    }

    /// Date and time at which the chat was created. Read-only.
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "createdDateTime")
    }

    /// Date and time at which the chat was renamed or the list of members
    /// was last changed. Read-only.
    pub fn last_updated_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "lastUpdatedDateTime")
    }

    /// Subject or topic for the chat. Only available for group chats.
    pub fn topic(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "topic")
    }

    /// The URL for the chat in Microsoft Teams. Read-only.
    pub fn web_url(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "webUrl")
    }

    /// The identifier of the tenant in which the chat was created.
    /// Read-only.
    pub fn tenant_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "tenantId")
    }

    /// Indicates whether the chat is hidden for all its members. Read-only.
    pub fn is_hidden_for_all_members(&self) -> Result<Option<bool>, Error> {
        prop::boolean(&self.properties, "isHiddenForAllMembers")
    }

    /// Represents details about an online meeting. If the chat isn't
    /// associated with an online meeting, the property is empty. Read-only.
    pub fn online_meeting_info(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "onlineMeetingInfo")
    }

    /// Represents caller-specific information about the chat, such as the
    /// last message read date and time.
    pub fn viewpoint(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "viewpoint")
    }
}

#[cfg(test)]
mod tests {
    use super::{Chat, ChatType};
    use crate::error::Error;

    #[test]
    fn deserialize_chat() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#chats/$entity",
    "id": "19:561082c0f3f847a58069deb8eb300807@thread.v2",
    "topic": "Release planning",
    "createdDateTime": "2021-04-06T19:49:52.431Z",
    "lastUpdatedDateTime": "2021-04-06T19:54:04.306Z",
    "chatType": "group",
    "webUrl": "https://teams.microsoft.com/l/chat/19%3A561082c0f3f847a58069deb8eb300807%40thread.v2/0",
    "tenantId": "2432b57b-0abd-43db-aa7b-16eadd115d34",
    "onlineMeetingInfo": null,
    "viewpoint": null,
    "isHiddenForAllMembers": false
}"#;

        let chat: Chat<'_> = serde_json::from_str(json).unwrap();
        assert_eq!(
            chat.entity().id().unwrap(),
            "19:561082c0f3f847a58069deb8eb300807@thread.v2"
        );
        assert_eq!(chat.topic().unwrap(), Some("Release planning"));
        assert_eq!(chat.chat_type().unwrap(), Some(ChatType::Group));
        assert_eq!(chat.is_hidden_for_all_members().unwrap(), Some(false));
        assert_eq!(chat.online_meeting_info().unwrap(), None);
    }

    #[test]
    fn unknown_chat_type_is_surfaced() {
        let json = r#"{"id": "19:x", "chatType": "holographic"}"#;

        let chat: Chat<'_> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            chat.chat_type(),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn chat_type_serializes_camel_case() {
        assert_eq!(ChatType::OneOnOne.to_string(), "oneOnOne");
        assert_eq!(ChatType::Group.to_string(), "group");
        assert_eq!("meeting".parse::<ChatType>().unwrap(), ChatType::Meeting);
    }
}
