// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel event types.

use serde::Serialize;

use crate::Channel;
use crate::types::ChannelId;

/// A change detected between two channel snapshots.
///
/// Both variants carry the channel as it is in the newer snapshot.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::event::ChannelEvent;
/// use eqoweb_lib::{Channel, ChannelId, ChannelType};
///
/// let lamp = Channel::new("Lamp", ChannelId::new(5), ChannelType::Toggle, "Living", Some(1));
/// let event = ChannelEvent::changed(lamp, Some(0));
///
/// assert_eq!(event.channel().value, Some(1));
/// assert_eq!(event.previous_value(), Some(0));
/// assert!(!event.is_new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChannelEvent {
    /// A known channel reported a different value.
    ValueChanged {
        /// The channel with its new value.
        channel: Channel,
        /// The value in the previous snapshot.
        previous: Option<i64>,
    },

    /// A channel appeared that was not in the previous snapshot.
    Appeared {
        /// The new channel.
        channel: Channel,
    },
}

impl ChannelEvent {
    /// Creates a value change event.
    #[must_use]
    pub fn changed(channel: Channel, previous: Option<i64>) -> Self {
        Self::ValueChanged { channel, previous }
    }

    /// Creates an event for a channel without a prior snapshot entry.
    #[must_use]
    pub fn appeared(channel: Channel) -> Self {
        Self::Appeared { channel }
    }

    /// Returns the channel as reported in the newer snapshot.
    #[must_use]
    pub fn channel(&self) -> &Channel {
        match self {
            Self::ValueChanged { channel, .. } | Self::Appeared { channel } => channel,
        }
    }

    /// Consumes the event and returns the channel.
    #[must_use]
    pub fn into_channel(self) -> Channel {
        match self {
            Self::ValueChanged { channel, .. } | Self::Appeared { channel } => channel,
        }
    }

    /// Returns the id of the affected channel.
    #[must_use]
    pub fn channel_id(&self) -> ChannelId {
        self.channel().id
    }

    /// Returns the previous value, or `None` if the channel is new or had no
    /// value.
    #[must_use]
    pub fn previous_value(&self) -> Option<i64> {
        match self {
            Self::ValueChanged { previous, .. } => *previous,
            Self::Appeared { .. } => None,
        }
    }

    /// Returns `true` if the channel was not in the previous snapshot.
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Appeared { .. })
    }
}
