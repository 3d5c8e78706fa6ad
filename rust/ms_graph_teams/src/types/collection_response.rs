/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::Error;
use crate::types::chat::Chat;
use crate::types::chat_message::ChatMessage;
use crate::types::chat_message_hosted_content::ChatMessageHostedContent;
use crate::types::conversation_member::ConversationMember;
use crate::types::pinned_chat_message::PinnedChatMessage;
use crate::types::resource_specific_permission_grant::ResourceSpecificPermissionGrant;
use crate::types::teams_app_installation::TeamsAppInstallation;
use crate::types::teams_async_operation::TeamsAsyncOperation;
use crate::types::teams_tab::TeamsTab;

/// A collection of resources, exactly as returned by the server.
///
/// The `value` array is exposed through typed views borrowing from the
/// response ([`chats`](Self::chats), [`messages`](Self::messages), ...). If
/// the response has additional results, [`next_link`](Self::next_link)
/// carries the URL of the next page; no pagination happens on this side.
///
/// See [Microsoft documentation](https://learn.microsoft.com/en-us/graph/paging)
/// for more information.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CollectionResponse<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}

impl<'a> CollectionResponse<'a> {
    /// Internal constructor.
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        CollectionResponse {
            properties: Cow::Borrowed(properties),
        }
    }

    /// The URL of the next page of this collection, if there is one
    /// (`@odata.nextLink`).
    pub fn next_link(&self) -> Option<&str> {
        self.properties
            .get("@odata.nextLink")
            .and_then(Value::as_str)
    }

    /// The opaque URL to query further changes after a delta function call
    /// completed (`@odata.deltaLink`).
    pub fn delta_link(&self) -> Option<&str> {
        self.properties
            .get("@odata.deltaLink")
            .and_then(Value::as_str)
    }

    /// The total count of the collection, when the request asked for one
    /// (`@odata.count`).
    pub fn odata_count(&self) -> Option<i64> {
        self.properties.get("@odata.count").and_then(Value::as_i64)
    }

    /// The raw entries of the collection.
    pub fn value(&self) -> Result<&[Value], Error> {
        let val = self.properties.get("value").ok_or(Error::NotFound)?;
        val.as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))
    }

    fn items<T>(
        &'a self,
        view: fn(&'a Map<String, Value>) -> T,
    ) -> Result<Vec<T>, Error> {
        self.value()?
            .iter()
            .map(|entry| {
                entry
                    .as_object()
                    .map(view)
                    .ok_or_else(|| Error::UnexpectedResponse(format!("{entry:?}")))
            })
            .collect()
    }

    /// The entries of a chat collection.
    pub fn chats(&'a self) -> Result<Vec<Chat<'a>>, Error> {
        self.items(Chat::new)
    }

    /// The entries of a chat message collection.
    pub fn messages(&'a self) -> Result<Vec<ChatMessage<'a>>, Error> {
        self.items(ChatMessage::new)
    }

    /// The entries of a conversation member collection.
    pub fn members(&'a self) -> Result<Vec<ConversationMember<'a>>, Error> {
        self.items(ConversationMember::new)
    }

    /// The entries of a hosted content collection.
    pub fn hosted_contents(&'a self) -> Result<Vec<ChatMessageHostedContent<'a>>, Error> {
        self.items(ChatMessageHostedContent::new)
    }

    /// The entries of an app installation collection.
    pub fn installed_apps(&'a self) -> Result<Vec<TeamsAppInstallation<'a>>, Error> {
        self.items(TeamsAppInstallation::new)
    }

    /// The entries of a pinned message collection.
    pub fn pinned_messages(&'a self) -> Result<Vec<PinnedChatMessage<'a>>, Error> {
        self.items(PinnedChatMessage::new)
    }

    /// The entries of a permission grant collection.
    pub fn permission_grants(
        &'a self,
    ) -> Result<Vec<ResourceSpecificPermissionGrant<'a>>, Error> {
        self.items(ResourceSpecificPermissionGrant::new)
    }

    /// The entries of a tab collection.
    pub fn tabs(&'a self) -> Result<Vec<TeamsTab<'a>>, Error> {
        self.items(TeamsTab::new)
    }

    /// The entries of an async operation collection.
    pub fn operations(&'a self) -> Result<Vec<TeamsAsyncOperation<'a>>, Error> {
        self.items(TeamsAsyncOperation::new)
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionResponse;

    #[test]
    fn deserialize_collection_with_next_page() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#chats",
    "@odata.count": 2,
    "value": [
        {
            "id": "19:561082c0f3f847a58069deb8eb300807@thread.v2",
            "topic": "Release planning",
            "chatType": "group"
        },
        {
            "id": "19:d74fc2ed57fb4ec29e498fd7451a9f05@thread.v2",
            "topic": null,
            "chatType": "oneOnOne"
        }
    ],
    "@odata.nextLink": "https://graph.microsoft.com/v1.0/users/u1/chats?%24skip=2"
}"#;

        let collection: CollectionResponse<'_> = serde_json::from_str(json).unwrap();
        assert_eq!(
            collection.next_link(),
            Some("https://graph.microsoft.com/v1.0/users/u1/chats?%24skip=2")
        );
        assert_eq!(collection.odata_count(), Some(2));

        let chats = collection.chats().unwrap();
        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0].topic().unwrap(), Some("Release planning"));
        assert_eq!(chats[1].topic().unwrap(), None);
    }

    #[test]
    fn deserialize_collection_without_next_page() {
        let json = r#"{"value": []}"#;

        let collection: CollectionResponse<'_> = serde_json::from_str(json).unwrap();
        assert!(collection.next_link().is_none());
        assert!(collection.delta_link().is_none());
        assert!(collection.chats().unwrap().is_empty());
    }

    #[test]
    fn delta_collection_carries_delta_link() {
        let json = r#"{
    "value": [],
    "@odata.deltaLink": "https://graph.microsoft.com/v1.0/users/u1/chats/c1/messages/delta?%24deltatoken=abc"
}"#;

        let collection: CollectionResponse<'_> = serde_json::from_str(json).unwrap();
        assert!(collection.delta_link().unwrap().contains("%24deltatoken"));
    }
}
