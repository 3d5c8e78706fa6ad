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

/// The importance of a chat message.
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum ChatMessageImportance {
    Normal,
    High,
    Urgent,
    UnknownFutureValue,
}

/// A message in a chat, or a reply to one.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ChatMessage<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> ChatMessage<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ChatMessage {
            properties: Cow::Borrowed(properties),
        }
    }

    /// Accessor to inherited properties from `Entity`.
    pub fn entity(&'a self) -> Entity<'a> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }

    /// The identity of the chat in which the message was posted. Read-only.
    pub fn chat_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "chatId")
    }

    /// The ID of the parent chat message or root chat message of the thread.
    /// Read-only, replies only.
    pub fn reply_to_id(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "replyToId")
    }

    /// The type of chat message, e.g. `message` or `systemEventMessage`.
    pub fn message_type(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "messageType")
    }

    /// The subject of the chat message, in plaintext.
    pub fn subject(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "subject")
    }

    /// Summary text of the chat message that could be used for push
    /// notifications and summary views or fall back views.
    pub fn summary(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "summary")
    }

    /// The importance of the chat message.
    pub fn importance(&self) -> Result<Option<ChatMessageImportance>, Error> {
        match prop::string(&self.properties, "importance")? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| Error::UnexpectedResponse(raw.to_string())),
            None => Ok(None),
        }
    }

    /// Locale of the chat message set by the client. Read-only.
    pub fn locale(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "locale")
    }

    /// Read-only. Version number of the chat message.
    pub fn etag(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "etag")
    }

    /// Timestamp of when the chat message was created. Read-only.
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "createdDateTime")
    }

    /// Timestamp when the chat message is created or edited. Read-only.
    pub fn last_modified_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "lastModifiedDateTime")
    }

    /// Timestamp when edits to the chat message were made. `None` if no
    /// edits were made. Read-only.
    pub fn last_edited_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "lastEditedDateTime")
    }

    /// Timestamp at which the chat message was deleted, or `None` if not
    /// deleted. Read-only.
    pub fn deleted_date_time(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "deletedDateTime")
    }

    /// The URL for the message in Microsoft Teams. Read-only.
    pub fn web_url(&self) -> Result<Option<&str>, Error> {
        prop::string(&self.properties, "webUrl")
    }

    /// Plaintext/HTML representation of the content of the chat message.
    pub fn body(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "body")
    }

    /// Details of the sender of the chat message. Read-only.
    pub fn from(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "from")
    }

    /// References to attached objects.
    pub fn attachments(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "attachments")
    }

    /// List of entities mentioned in the chat message.
    pub fn mentions(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "mentions")
    }

    /// Reactions for this chat message.
    pub fn reactions(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "reactions")
    }

    /// If the message was sent in a channel or chat because of a system
    /// event, this carries the event details. Read-only.
    pub fn event_detail(&self) -> Result<Option<&Value>, Error> {
        prop::raw(&self.properties, "eventDetail")
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ChatMessageImportance};

    #[test]
    fn deserialize_chat_message() {
        let json = r#"{
    "id": "1616964509832",
    "replyToId": null,
    "etag": "1616964509832",
    "messageType": "message",
    "createdDateTime": "2021-03-28T20:48:29.832Z",
    "lastModifiedDateTime": "2021-03-28T20:48:29.832Z",
    "deletedDateTime": null,
    "subject": null,
    "summary": null,
    "chatId": "19:2da4c29f6d7041eca70b638b43d45437@thread.v2",
    "importance": "high",
    "locale": "en-us",
    "webUrl": null,
    "from": {
        "user": {
            "id": "8ea0e38b-efb3-4757-924a-5f94061cf8c2",
            "displayName": "Robin Kline"
        }
    },
    "body": {
        "contentType": "text",
        "content": "Hello world"
    }
}"#;

        let message: ChatMessage<'_> = serde_json::from_str(json).unwrap();
        assert_eq!(message.entity().id().unwrap(), "1616964509832");
        assert_eq!(message.message_type().unwrap(), Some("message"));
        assert_eq!(
            message.importance().unwrap(),
            Some(ChatMessageImportance::High)
        );
        assert_eq!(message.deleted_date_time().unwrap(), None);
        assert_eq!(message.reply_to_id().unwrap(), None);

        let body = message.body().unwrap().unwrap();
        assert_eq!(body["content"], "Hello world");
    }

    #[test]
    fn importance_serializes_camel_case() {
        assert_eq!(ChatMessageImportance::Normal.to_string(), "normal");
        assert_eq!(ChatMessageImportance::Urgent.to_string(), "urgent");
    }
}
