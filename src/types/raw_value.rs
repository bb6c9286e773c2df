// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel value as it appears on the wire.

use serde::Deserialize;

/// A channel value in one of the shapes the controller sends.
///
/// Current firmware sends a bare scalar (`"Val": 7`). Older EQOweb versions
/// wrap it in a one-element sequence (`"Val": [7]`). Channels without a value
/// send `null` or omit the field.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::types::RawValue;
///
/// let scalar: RawValue = serde_json::from_str("7").unwrap();
/// let legacy: RawValue = serde_json::from_str("[7]").unwrap();
/// assert_eq!(scalar.resolve(), Some(Some(7)));
/// assert_eq!(legacy.resolve(), Some(Some(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// No value.
    #[default]
    Null,
    /// A bare scalar.
    Scalar(i64),
    /// A legacy sequence whose first element is the value.
    Sequence(Vec<i64>),
}

impl RawValue {
    /// Resolves the wire shape to the channel value.
    ///
    /// Returns `None` when the value is an empty sequence, which has no
    /// meaningful interpretation.
    #[must_use]
    pub fn resolve(&self) -> Option<Option<i64>> {
        match self {
            Self::Null => Some(None),
            Self::Scalar(value) => Some(Some(*value)),
            Self::Sequence(values) => values.first().map(|value| Some(*value)),
        }
    }
}
