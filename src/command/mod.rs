// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! EQOweb command definitions.
//!
//! Every request to the controller is a message envelope of the form
//! `{"Type": <command code>, "Value": <payload or null>}`.
//!
//! # Available Commands
//!
//! | Command Type | Code | Payload |
//! |-------------|------|---------|
//! | [`LoginCommand`] | 1 | `{"Usr": .., "Psw": ..}` |
//! | [`GetGroupsCommand`] | 10 | `null` |
//! | [`SetStatusCommand`] | 12 | `{"Chnl": .., "Val": [..]}` |
//!
//! # Examples
//!
//! ```
//! use eqoweb_lib::command::{Command, SetStatusCommand};
//! use eqoweb_lib::types::ChannelId;
//!
//! let cmd = SetStatusCommand::new(ChannelId::new(5), 1);
//! assert_eq!(cmd.to_json(), r#"{"Type":12,"Value":{"Chnl":5,"Val":[1]}}"#);
//! ```

mod code;
mod groups;
mod login;
mod status;

pub use code::CommandCode;
pub use groups::GetGroupsCommand;
pub use login::LoginCommand;
pub use status::SetStatusCommand;

use serde::Serialize;

/// A command that can be sent to the controller.
pub trait Command {
    /// Returns the command code placed in the `Type` field.
    fn code(&self) -> CommandCode;

    /// Returns the payload placed in the `Value` field.
    fn value(&self) -> serde_json::Value;

    /// Builds the message envelope for this command.
    fn to_message(&self) -> Message {
        Message::new(self.code(), self.value())
    }

    /// Returns the compact JSON encoding sent in the `strJSON` form field.
    fn to_json(&self) -> String {
        self.to_message().to_json()
    }
}

/// The `{Type, Value}` envelope wrapping every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "Type")]
    code: CommandCode,
    #[serde(rename = "Value")]
    value: serde_json::Value,
}

impl Message {
    /// Creates an envelope from a command code and payload.
    #[must_use]
    pub fn new(code: CommandCode, value: serde_json::Value) -> Self {
        Self { code, value }
    }

    /// Returns the command code.
    #[must_use]
    pub fn code(&self) -> CommandCode {
        self.code
    }

    /// Returns the payload.
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Returns the compact JSON encoding of the envelope.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::json!({ "Type": self.code.as_i64(), "Value": self.value }).to_string()
    }
}
