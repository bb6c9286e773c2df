// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login command.

use std::fmt;

use super::{Command, CommandCode};

/// Authenticates against the controller.
///
/// Payload: `{"Usr": <user>, "Psw": <password>}`.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCommand {
    user: String,
    password: String,
}

impl LoginCommand {
    /// Creates a login command.
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns the user name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

// Keeps the password out of logs.
impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl Command for LoginCommand {
    fn code(&self) -> CommandCode {
        CommandCode::Login
    }

    fn value(&self) -> serde_json::Value {
        serde_json::json!({ "Usr": self.user, "Psw": self.password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields() {
        let cmd = LoginCommand::new("QBUS", "1234");
        assert_eq!(cmd.code(), CommandCode::Login);
        assert_eq!(cmd.value()["Usr"], "QBUS");
        assert_eq!(cmd.value()["Psw"], "1234");
    }

    #[test]
    fn debug_hides_password() {
        let debug = format!("{:?}", LoginCommand::new("QBUS", "hunter2"));
        assert!(debug.contains("QBUS"));
        assert!(!debug.contains("hunter2"));
    }
}
