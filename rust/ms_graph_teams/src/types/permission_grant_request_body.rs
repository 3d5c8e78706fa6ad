/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when creating or updating a resource-specific
/// permission grant on a chat.
#[derive(Clone, Debug, Default)]
pub struct PermissionGrantRequestBody {
    pub id: Option<String>,
    pub client_app_id: Option<String>,
    pub client_id: Option<String>,
    pub permission: Option<String>,
    pub permission_type: Option<String>,
    pub resource_app_id: Option<String>,
}

impl PermissionGrantRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("clientAppId", self.client_app_id.map(Value::from)),
            ("clientId", self.client_id.map(Value::from)),
            ("permission", self.permission.map(Value::from)),
            ("permissionType", self.permission_type.map(Value::from)),
            ("resourceAppId", self.resource_app_id.map(Value::from)),
        ])
    }
}
