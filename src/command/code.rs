// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric command codes of the EQOweb protocol.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

/// Command code carried in the `Type` field of an envelope.
///
/// The controller answers each request code with the code that follows it.
/// Responses are not checked against the request
/// code; payload shape alone decides how a response is read.
///
/// # Examples
///
/// ```
/// use eqoweb_lib::command::CommandCode;
///
/// assert_eq!(CommandCode::GetGroups.as_i64(), 10);
/// assert_eq!(CommandCode::try_from(13).unwrap(), CommandCode::SetStatusResponse);
/// assert_eq!(
///     CommandCode::Login.response_code(),
///     Some(CommandCode::LoginResponse)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// Error response.
    Error,
    /// Login request.
    Login,
    /// Login response.
    LoginResponse,
    /// Group and channel enumeration request.
    GetGroups,
    /// Group and channel enumeration response.
    GetGroupsResponse,
    /// Channel value write request.
    SetStatus,
    /// Channel value write response.
    SetStatusResponse,
    /// Channel status request.
    GetStatus,
    /// Channel status response.
    GetStatusResponse,
    /// Menu status request.
    GetMenuStatus,
    /// Menu status response.
    GetMenuStatusResponse,
}

impl CommandCode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Error => 0,
            Self::Login => 1,
            Self::LoginResponse => 2,
            Self::GetGroups => 10,
            Self::GetGroupsResponse => 11,
            Self::SetStatus => 12,
            Self::SetStatusResponse => 13,
            Self::GetStatus => 14,
            Self::GetStatusResponse => 15,
            Self::GetMenuStatus => 16,
            Self::GetMenuStatusResponse => 17,
        }
    }

    /// Returns the response code the controller uses for this request code.
    ///
    /// Returns `None` for codes that are themselves responses.
    #[must_use]
    pub const fn response_code(self) -> Option<Self> {
        match self {
            Self::Login => Some(Self::LoginResponse),
            Self::GetGroups => Some(Self::GetGroupsResponse),
            Self::SetStatus => Some(Self::SetStatusResponse),
            Self::GetStatus => Some(Self::GetStatusResponse),
            Self::GetMenuStatus => Some(Self::GetMenuStatusResponse),
            _ => None,
        }
    }
}

impl TryFrom<i64> for CommandCode {
    type Error = ParseError;

    fn try_from(code: i64) -> Result<Self, ParseError> {
        match code {
            0 => Ok(Self::Error),
            1 => Ok(Self::Login),
            2 => Ok(Self::LoginResponse),
            10 => Ok(Self::GetGroups),
            11 => Ok(Self::GetGroupsResponse),
            12 => Ok(Self::SetStatus),
            13 => Ok(Self::SetStatusResponse),
            14 => Ok(Self::GetStatus),
            15 => Ok(Self::GetStatusResponse),
            16 => Ok(Self::GetMenuStatus),
            17 => Ok(Self::GetMenuStatusResponse),
            other => Err(ParseError::InvalidValue {
                field: "Type".to_string(),
                message: format!("unknown command code {other}"),
            }),
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}({})", self.as_i64())
    }
}

impl Serialize for CommandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}
