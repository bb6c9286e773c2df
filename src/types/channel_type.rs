// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel kinds as reported by the controller's icon code.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of a channel.
///
/// The controller sends an icon code (`Ico`) with every channel; the code is
/// used directly as the type ordinal. Code 6 is unassigned. Codes the library
/// does not know are kept in [`ChannelType::Other`].
///
/// # Examples
///
/// ```
/// use eqoweb_lib::types::ChannelType;
///
/// assert_eq!(ChannelType::from_code(1), ChannelType::Dimmer);
/// assert_eq!(ChannelType::from_code(7), ChannelType::Scenes);
/// assert_eq!(ChannelType::from_code(6), ChannelType::Other(6));
/// assert_eq!(ChannelType::Shutters.code(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    /// On/off output.
    Toggle,
    /// Dimmable light.
    Dimmer,
    /// Thermostat set point.
    SetTemp,
    /// Thermostat program.
    ProgTemp,
    /// Shutter or blind.
    Shutters,
    /// Audio zone.
    Audio,
    /// Scene trigger.
    Scenes,
    /// Renson ventilation.
    Renson,
    /// An icon code unknown to this library.
    Other(i64),
}

impl ChannelType {
    /// Maps an icon code to a channel type.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Toggle,
            1 => Self::Dimmer,
            2 => Self::SetTemp,
            3 => Self::ProgTemp,
            4 => Self::Shutters,
            5 => Self::Audio,
            7 => Self::Scenes,
            8 => Self::Renson,
            other => Self::Other(other),
        }
    }

    /// Returns the icon code used by the controller.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Toggle => 0,
            Self::Dimmer => 1,
            Self::SetTemp => 2,
            Self::ProgTemp => 3,
            Self::Shutters => 4,
            Self::Audio => 5,
            Self::Scenes => 7,
            Self::Renson => 8,
            Self::Other(code) => code,
        }
    }

    /// Returns a short name for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Dimmer => "dimmer",
            Self::SetTemp => "set_temp",
            Self::ProgTemp => "prog_temp",
            Self::Shutters => "shutters",
            Self::Audio => "audio",
            Self::Scenes => "scenes",
            Self::Renson => "renson",
            Self::Other(_) => "other",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "other({code})"),
            known => f.write_str(known.as_str()),
        }
    }
}

impl From<i64> for ChannelType {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl Serialize for ChannelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ChannelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for code in [0, 1, 2, 3, 4, 5, 7, 8] {
            let kind = ChannelType::from_code(code);
            assert!(!matches!(kind, ChannelType::Other(_)));
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unknown_code_is_preserved() {
        let kind = ChannelType::from_code(12);
        assert_eq!(kind, ChannelType::Other(12));
        assert_eq!(kind.code(), 12);
        assert_eq!(kind.to_string(), "other(12)");
    }

    #[test]
    fn deserializes_from_icon_code() {
        let kind: ChannelType = serde_json::from_str("4").unwrap();
        assert_eq!(kind, ChannelType::Shutters);
    }

    #[test]
    fn out_of_byte_range_codes_are_preserved() {
        for code in [300, -1, i64::from(u32::MAX) + 1] {
            let kind: ChannelType = serde_json::from_str(&code.to_string()).unwrap();
            assert_eq!(kind, ChannelType::Other(code));
            assert_eq!(serde_json::to_string(&kind).unwrap(), code.to_string());
        }
    }

    #[test]
    fn display() {
        assert_eq!(ChannelType::SetTemp.to_string(), "set_temp");
        assert_eq!(ChannelType::Toggle.to_string(), "toggle");
    }
}
