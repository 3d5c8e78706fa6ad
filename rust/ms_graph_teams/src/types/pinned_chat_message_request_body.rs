/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when pinning a message in a chat. The message to pin
/// is bound through `message_odata_bind`.
#[derive(Clone, Debug, Default)]
pub struct PinnedChatMessageRequestBody {
    pub id: Option<String>,
    pub message: Option<Value>,
    pub message_odata_bind: Option<String>,
}

impl PinnedChatMessageRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("message", self.message),
            (
                "message@odata.bind",
                self.message_odata_bind.map(Value::from),
            ),
        ])
    }
}
