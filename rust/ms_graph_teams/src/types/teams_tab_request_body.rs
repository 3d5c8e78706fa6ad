/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;

/// The fields accepted when adding or updating a chat tab. Adding a tab
/// binds the backing app through `teams_app_odata_bind`.
#[derive(Clone, Debug, Default)]
pub struct TeamsTabRequestBody {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub web_url: Option<String>,
    pub configuration: Option<Value>,
    pub teams_app_odata_bind: Option<String>,
}

impl TeamsTabRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("displayName", self.display_name.map(Value::from)),
            ("webUrl", self.web_url.map(Value::from)),
            ("configuration", self.configuration),
            (
                "teamsApp@odata.bind",
                self.teams_app_odata_bind.map(Value::from),
            ),
        ])
    }
}
