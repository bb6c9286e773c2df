// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group enumeration response parsing.

use serde::Deserialize;

use crate::types::{ChannelId, ChannelType, RawValue};

/// Payload of a `GetGroups` response.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::response::GroupsResponse;
///
/// let json = r#"{"Groups": [
///     {"Nme": "Living", "Itms": [{"Nme": "Lamp", "Chnl": 5, "Ico": 0, "Val": 0}]}
/// ]}"#;
/// let response: GroupsResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.groups[0].name, "Living");
/// assert_eq!(response.groups[0].items[0].name, "Lamp");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupsResponse {
    /// Groups in controller order.
    #[serde(rename = "Groups", default)]
    pub groups: Vec<GroupRecord>,
}

/// A named group of channels.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupRecord {
    /// Group name.
    #[serde(rename = "Nme")]
    pub name: String,
    /// Channels in this group.
    #[serde(rename = "Itms", default)]
    pub items: Vec<ChannelRecord>,
}

/// A channel as sent by the controller.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelRecord {
    /// Display name.
    #[serde(rename = "Nme")]
    pub name: String,
    /// Channel id.
    #[serde(rename = "Chnl")]
    pub id: ChannelId,
    /// Icon code, used as the channel type.
    #[serde(rename = "Ico")]
    pub icon: ChannelType,
    /// Current value in scalar or legacy sequence shape.
    #[serde(rename = "Val", default)]
    pub value: RawValue,
}
