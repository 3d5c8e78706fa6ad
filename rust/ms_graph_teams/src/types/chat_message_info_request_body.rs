/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when updating a chat's last message preview.
#[derive(Clone, Debug, Default)]
pub struct ChatMessageInfoRequestBody {
    pub id: Option<String>,
    pub body: Option<Value>,
    pub created_date_time: Option<String>,
    pub event_detail: Option<Value>,
    pub from: Option<Value>,
    pub is_deleted: Option<bool>,
    pub message_type: Option<String>,
}

impl ChatMessageInfoRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("body", self.body),
            ("createdDateTime", self.created_date_time.map(Value::from)),
            ("eventDetail", self.event_detail),
            ("from", self.from),
            ("isDeleted", self.is_deleted.map(Value::from)),
            ("messageType", self.message_type.map(Value::from)),
        ])
    }
}
