// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a channel on the controller.
///
/// Serialized transparently as the integer the controller uses in the
/// `Chnl` field.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::types::ChannelId;
///
/// let id = ChannelId::new(5);
/// assert_eq!(id.value(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(u32);

impl ChannelId {
    /// Creates a channel identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChannelId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ChannelId> for u32 {
    fn from(id: ChannelId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ChannelId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: ChannelId = serde_json::from_str("17").unwrap();
        assert_eq!(id, ChannelId::new(17));
    }

    #[test]
    fn conversions() {
        let id = ChannelId::from(9);
        assert_eq!(u32::from(id), 9);
    }
}
