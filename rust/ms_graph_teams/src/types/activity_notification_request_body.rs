/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The parameters of the `sendActivityNotification` action.
#[derive(Clone, Debug, Default)]
pub struct ActivityNotificationRequestBody {
    pub topic: Option<Value>,
    pub activity_type: Option<String>,
    pub chain_id: Option<i64>,
    pub preview_text: Option<Value>,
    pub teams_app_id: Option<String>,
    pub template_parameters: Option<Value>,
    pub recipient: Option<Value>,
}

impl ActivityNotificationRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("topic", self.topic),
            ("activityType", self.activity_type.map(Value::from)),
            ("chainId", self.chain_id.map(Value::from)),
            ("previewText", self.preview_text),
            ("teamsAppId", self.teams_app_id.map(Value::from)),
            ("templateParameters", self.template_parameters),
            ("recipient", self.recipient),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityNotificationRequestBody;
    use serde_json::{json, Value};

    #[test]
    fn chain_id_zero_is_kept() {
        let body = ActivityNotificationRequestBody {
            activity_type: Some("taskCreated".to_string()),
            chain_id: Some(0),
            preview_text: Some(json!({"content": "New task"})),
            ..Default::default()
        };

        let object = body.into_object();
        assert_eq!(object.get("chainId"), Some(&Value::from(0)));
        assert!(!object.contains_key("recipient"));
    }
}
