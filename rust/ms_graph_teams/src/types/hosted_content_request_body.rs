/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when creating or updating hosted content on a chat
/// message. `content_bytes` carries the base64-encoded content; the raw
/// bytes go through the `$value` media endpoint instead.
#[derive(Clone, Debug, Default)]
pub struct HostedContentRequestBody {
    pub id: Option<String>,
    pub content_bytes: Option<String>,
    pub content_type: Option<String>,
}

impl HostedContentRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("contentBytes", self.content_bytes.map(Value::from)),
            ("contentType", self.content_type.map(Value::from)),
        ])
    }
}
