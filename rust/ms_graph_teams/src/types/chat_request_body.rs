/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;
use crate::types::chat::ChatType;

/// The fields accepted when creating or updating a chat.
///
/// Fields left at `None` are dropped from the serialized body. Structured
/// fields carry raw JSON; whatever they contain goes out on the wire as-is,
/// `null` entries included.
#[derive(Clone, Debug, Default)]
pub struct ChatRequestBody {
    pub id: Option<String>,
    pub chat_type: Option<ChatType>,
    pub topic: Option<String>,
    pub created_date_time: Option<String>,
    pub last_updated_date_time: Option<String>,
    pub web_url: Option<String>,
    pub tenant_id: Option<String>,
    pub is_hidden_for_all_members: Option<bool>,
    pub online_meeting_info: Option<Value>,
    pub viewpoint: Option<Value>,
    pub installed_apps: Option<Value>,
    pub last_message_preview: Option<Value>,
    pub members: Option<Value>,
    pub messages: Option<Value>,
    pub operations: Option<Value>,
    pub permission_grants: Option<Value>,
    pub pinned_messages: Option<Value>,
    pub tabs: Option<Value>,
}

impl ChatRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("chatType", self.chat_type.map(|v| v.to_string().into())),
            ("topic", self.topic.map(Value::from)),
            ("createdDateTime", self.created_date_time.map(Value::from)),
            (
                "lastUpdatedDateTime",
                self.last_updated_date_time.map(Value::from),
            ),
            ("webUrl", self.web_url.map(Value::from)),
            ("tenantId", self.tenant_id.map(Value::from)),
            (
                "isHiddenForAllMembers",
                self.is_hidden_for_all_members.map(Value::from),
            ),
            ("onlineMeetingInfo", self.online_meeting_info),
            ("viewpoint", self.viewpoint),
            ("installedApps", self.installed_apps),
            ("lastMessagePreview", self.last_message_preview),
            ("members", self.members),
            ("messages", self.messages),
            ("operations", self.operations),
            ("permissionGrants", self.permission_grants),
            ("pinnedMessages", self.pinned_messages),
            ("tabs", self.tabs),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::ChatRequestBody;
    use crate::types::chat::ChatType;
    use serde_json::{json, Value};

    #[test]
    fn unset_fields_are_dropped_and_falsy_fields_kept() {
        let body = ChatRequestBody {
            chat_type: Some(ChatType::Group),
            topic: Some("t".to_string()),
            is_hidden_for_all_members: Some(false),
            ..Default::default()
        };

        let object = body.into_object();
        assert_eq!(object.len(), 3);
        assert_eq!(object.get("chatType"), Some(&Value::from("group")));
        assert_eq!(object.get("topic"), Some(&Value::from("t")));
        assert_eq!(
            object.get("isHiddenForAllMembers"),
            Some(&Value::from(false))
        );
    }

    #[test]
    fn structured_fields_pass_through_untouched() {
        let body = ChatRequestBody {
            members: Some(json!([{
                "@odata.type": "#microsoft.graph.aadUserConversationMember",
                "roles": ["owner"],
                "visibleHistoryStartDateTime": null,
            }])),
            ..Default::default()
        };

        let object = body.into_object();
        let member = &object.get("members").unwrap()[0];
        assert_eq!(member["visibleHistoryStartDateTime"], Value::Null);
    }
}
