// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group enumeration command.

use super::{Command, CommandCode};

/// Requests every group with its channels and their current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetGroupsCommand;

impl Command for GetGroupsCommand {
    fn code(&self) -> CommandCode {
        CommandCode::GetGroups
    }

    fn value(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}
