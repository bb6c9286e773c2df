// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change detection between channel snapshots.
//!
//! The controller offers no push notifications. Changes are found by
//! comparing the channel map before and after a refreshing enumeration, see
//! [`Client::events`](crate::Client::events).
//!
//! # Examples
//!
//! ```
//! use eqoweb_lib::event::detect_changes;
//! use eqoweb_lib::{Channel, ChannelId, ChannelMap, ChannelType};
//!
//! let lamp = |value| Channel::new("Lamp", ChannelId::new(5), ChannelType::Toggle, "Living", Some(value));
//!
//! let mut old = ChannelMap::new();
//! old.insert(ChannelId::new(5), lamp(0));
//! let mut new = ChannelMap::new();
//! new.insert(ChannelId::new(5), lamp(1));
//!
//! let events = detect_changes(Some(&old), &new);
//! assert_eq!(events[&ChannelId::new(5)].previous_value(), Some(0));
//! ```

mod channel_event;

pub use channel_event::ChannelEvent;

use indexmap::IndexMap;

use crate::ChannelMap;
use crate::types::ChannelId;

/// Compares two snapshots and returns one event per changed channel.
///
/// Events follow the order of `new`. Channels absent from `old` (every
/// channel when there is no previous snapshot) are reported as
/// [`ChannelEvent::Appeared`]. Channels that disappeared are not reported.
#[must_use]
pub fn detect_changes(
    old: Option<&ChannelMap>,
    new: &ChannelMap,
) -> IndexMap<ChannelId, ChannelEvent> {
    new.iter()
        .filter_map(|(id, channel)| {
            let event = match old.and_then(|old| old.get(id)) {
                Some(previous) if previous.value == channel.value => return None,
                Some(previous) => ChannelEvent::changed(channel.clone(), previous.value),
                None => ChannelEvent::appeared(channel.clone()),
            };
            Some((*id, event))
        })
        .collect()
}
