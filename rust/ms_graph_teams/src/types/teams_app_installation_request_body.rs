/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when installing or updating an app in a chat. The
/// app to install is bound through `teams_app_odata_bind`.
#[derive(Clone, Debug, Default)]
pub struct TeamsAppInstallationRequestBody {
    pub id: Option<String>,
    pub consented_permission_set: Option<Value>,
    pub teams_app_odata_bind: Option<String>,
    pub teams_app_definition_odata_bind: Option<String>,
}

impl TeamsAppInstallationRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("consentedPermissionSet", self.consented_permission_set),
            (
                "teamsApp@odata.bind",
                self.teams_app_odata_bind.map(Value::from),
            ),
            (
                "teamsAppDefinition@odata.bind",
                self.teams_app_definition_odata_bind.map(Value::from),
            ),
        ])
    }
}
