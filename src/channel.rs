// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controllable channels.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ParseError;
use crate::response::ChannelRecord;
use crate::types::{ChannelId, ChannelType};

/// Channels keyed by id, in the order the controller listed them.
pub type ChannelMap = IndexMap<ChannelId, Channel>;

/// One controllable point on the controller, such as a light or a shutter.
///
/// Channels are created from the records of a group enumeration. The group
/// name is not part of the record; it comes from the group the controller
/// nested the channel under.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::{Channel, ChannelId, ChannelType};
///
/// let lamp = Channel::new("Lamp", ChannelId::new(5), ChannelType::Toggle, "Living", Some(0));
/// assert_eq!(lamp.to_string(), "<Channel type=toggle id=5 name=Lamp value=0>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    /// Display name.
    pub name: String,
    /// Unique channel id.
    pub id: ChannelId,
    /// Channel kind.
    pub channel_type: ChannelType,
    /// Name of the group the channel belongs to.
    pub group_name: String,
    /// Last known value, if the controller reports one.
    pub value: Option<i64>,
}

impl Channel {
    /// Creates a channel.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: ChannelId,
        channel_type: ChannelType,
        group_name: impl Into<String>,
        value: Option<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            channel_type,
            group_name: group_name.into(),
            value,
        }
    }

    /// Builds a channel from a controller record.
    ///
    /// A value sent as a legacy one-element sequence is unwrapped to its
    /// first element.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyValueSequence`] if the value is an empty
    /// sequence.
    pub fn from_record(record: ChannelRecord, group_name: &str) -> Result<Self, ParseError> {
        let value = record
            .value
            .resolve()
            .ok_or(ParseError::EmptyValueSequence {
                channel: record.id.value(),
            })?;

        Ok(Self {
            name: record.name,
            id: record.id,
            channel_type: record.icon,
            group_name: group_name.to_string(),
            value,
        })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Channel type={} id={} name={} value=",
            self.channel_type, self.id, self.name
        )?;
        match self.value {
            Some(value) => write!(f, "{value}>"),
            None => f.write_str("none>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ChannelRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn scalar_and_legacy_values_are_identical() {
        let scalar = record(r#"{"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": 7}"#);
        let legacy = record(r#"{"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": [7]}"#);

        let a = Channel::from_record(scalar, "Living").unwrap();
        let b = Channel::from_record(legacy, "Living").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.value, Some(7));
    }

    #[test]
    fn empty_sequence_fails() {
        let rec = record(r#"{"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": []}"#);
        let err = Channel::from_record(rec, "Living").unwrap_err();
        assert!(matches!(err, ParseError::EmptyValueSequence { channel: 5 }));
    }

    #[test]
    fn group_name_comes_from_caller() {
        let rec = record(r#"{"Nme": "Blind", "Chnl": 12, "Ico": 4, "Val": 100}"#);
        let channel = Channel::from_record(rec, "Bedroom").unwrap();
        assert_eq!(channel.group_name, "Bedroom");
        assert_eq!(channel.channel_type, ChannelType::Shutters);
        assert_eq!(channel.name, "Blind");
    }

    #[test]
    fn null_value_is_none() {
        let rec = record(r#"{"Nme": "Movie", "Chnl": 30, "Ico": 7, "Val": null}"#);
        let channel = Channel::from_record(rec, "Scenes").unwrap();
        assert_eq!(channel.value, None);
        assert_eq!(
            channel.to_string(),
            "<Channel type=scenes id=30 name=Movie value=none>"
        );
    }
}
