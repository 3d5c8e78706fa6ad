/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when adding or updating a chat member.
///
/// Adding a member requires the concrete member type in `odata_type`
/// (e.g. `#microsoft.graph.aadUserConversationMember`) and a bound user in
/// `user_odata_bind`.
#[derive(Clone, Debug, Default)]
pub struct ConversationMemberRequestBody {
    pub id: Option<String>,
    pub odata_type: Option<String>,
    pub display_name: Option<String>,
    pub roles: Option<Vec<String>>,
    pub visible_history_start_date_time: Option<String>,
    pub user_odata_bind: Option<String>,
}

impl ConversationMemberRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("@odata.type", self.odata_type.map(Value::from)),
            ("displayName", self.display_name.map(Value::from)),
            ("roles", self.roles.map(Value::from)),
            (
                "visibleHistoryStartDateTime",
                self.visible_history_start_date_time.map(Value::from),
            ),
            ("user@odata.bind", self.user_odata_bind.map(Value::from)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::ConversationMemberRequestBody;
    use serde_json::{json, Value};

    #[test]
    fn member_body_uses_odata_keys() {
        let body = ConversationMemberRequestBody {
            odata_type: Some("#microsoft.graph.aadUserConversationMember".to_string()),
            roles: Some(vec!["owner".to_string()]),
            user_odata_bind: Some(
                "https://graph.microsoft.com/v1.0/users/4595d2f2".to_string(),
            ),
            ..Default::default()
        };

        let object = body.into_object();
        assert_eq!(
            object.get("@odata.type"),
            Some(&Value::from("#microsoft.graph.aadUserConversationMember"))
        );
        assert_eq!(object.get("roles"), Some(&json!(["owner"])));
        assert!(object.contains_key("user@odata.bind"));
        assert!(!object.contains_key("displayName"));
    }
}
