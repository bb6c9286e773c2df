// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login response parsing.

use serde::Deserialize;
use serde_json::Value;

/// Payload of a login response.
///
/// The controller reports success in the `rsp` field. Any falsy value
/// (`false`, `0`, `""`, `null`) or a missing field counts as rejected.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::response::LoginResponse;
///
/// let ok: LoginResponse = serde_json::from_str(r#"{"rsp": true}"#).unwrap();
/// assert!(ok.accepted());
///
/// let rejected: LoginResponse = serde_json::from_str("{}").unwrap();
/// assert!(!rejected.accepted());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    rsp: Value,
}

impl LoginResponse {
    /// Returns whether the controller accepted the credentials.
    #[must_use]
    pub fn accepted(&self) -> bool {
        is_truthy(&self.rsp)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
