// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Channel write command.

use super::{Command, CommandCode};
use crate::types::ChannelId;

/// Writes a value to a channel.
///
/// The value always travels as a one-element sequence, whatever shape the
/// controller uses when reporting values back.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::command::{Command, SetStatusCommand};
/// use eqoweb_lib::types::ChannelId;
///
/// let cmd = SetStatusCommand::new(ChannelId::new(21), 75);
/// assert_eq!(cmd.value(), serde_json::json!({"Chnl": 21, "Val": [75]}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStatusCommand {
    channel: ChannelId,
    value: i64,
}

impl SetStatusCommand {
    /// Creates a write command for a channel.
    #[must_use]
    pub const fn new(channel: ChannelId, value: i64) -> Self {
        Self { channel, value }
    }

    /// Returns the target channel.
    #[must_use]
    pub const fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Returns the value to write.
    #[must_use]
    pub const fn target_value(&self) -> i64 {
        self.value
    }
}

impl Command for SetStatusCommand {
    fn code(&self) -> CommandCode {
        CommandCode::SetStatus
    }

    fn value(&self) -> serde_json::Value {
        serde_json::json!({ "Chnl": self.channel, "Val": [self.value] })
    }
}
