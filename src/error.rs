// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the EQOweb library.
//!
//! Failures fall into four kinds that callers can tell apart:
//!
//! - [`Error::InvalidCredentials`]: the controller rejected the login
//! - [`Error::Controller`]: the controller answered with a numeric error code
//! - [`Error::Parse`]: the response was malformed
//! - [`Error::Protocol`]: the HTTP exchange itself failed (timeouts and
//!   bodies that are not JSON included)

use std::fmt;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The controller reported an error code inside the response payload.
    #[error("controller error: {0}")]
    Controller(#[from] ControllerError),

    /// The login was answered with a falsy `rsp` field.
    #[error("login or password is wrong")]
    InvalidCredentials,

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Known controller error codes.
///
/// Every code outside `1..=8` maps to [`ControllerErrorKind::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerErrorKind {
    /// Code 1.
    Busy,
    /// Code 2.
    SessionTimeout,
    /// Code 3.
    TooManyDevices,
    /// Code 4.
    ExecutionFailed,
    /// Code 5.
    SessionNotStarted,
    /// Code 6.
    UnknownCommand,
    /// Code 7.
    MissingConfiguration,
    /// Code 8.
    SystemManagerConnected,
    /// Any other code.
    Undefined,
}

impl ControllerErrorKind {
    /// Looks up the kind for a numeric code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Busy,
            2 => Self::SessionTimeout,
            3 => Self::TooManyDevices,
            4 => Self::ExecutionFailed,
            5 => Self::SessionNotStarted,
            6 => Self::UnknownCommand,
            7 => Self::MissingConfiguration,
            8 => Self::SystemManagerConnected,
            _ => Self::Undefined,
        }
    }

    /// Returns the fixed human-readable message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Busy => "The controller is busy, please try again later",
            Self::SessionTimeout => "Your session timed out. Please login again",
            Self::TooManyDevices => "Too much devices are connected to the controller.",
            Self::ExecutionFailed => "The controller was unable to execute your command.",
            Self::SessionNotStarted => "Your session could not be started",
            Self::UnknownCommand => "The command is unknown",
            Self::MissingConfiguration => {
                "No EQOweb configuration found, please run System manager to upload and configure EQOweb."
            }
            Self::SystemManagerConnected => {
                "System manager is still connected. Please close System manager to continue"
            }
            Self::Undefined => "Undefined error in the controller. Please try again later",
        }
    }
}

/// An error code returned by the controller.
///
/// The original numeric code is kept so callers can log or match on it, while
/// [`Display`](fmt::Display) yields the descriptive message. An `Error` field
/// that is not an integer has no code and reads as
/// [`ControllerErrorKind::Undefined`].
///
/// # Examples
///
/// ```
/// use eqoweb_lib::error::{ControllerError, ControllerErrorKind};
///
/// let err = ControllerError::from_code(3);
/// assert_eq!(err.code(), Some(3));
/// assert_eq!(err.to_string(), "Too much devices are connected to the controller.");
///
/// let err = ControllerError::unrecognized();
/// assert_eq!(err.code(), None);
/// assert_eq!(err.kind(), ControllerErrorKind::Undefined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerError {
    code: Option<i64>,
}

impl ControllerError {
    /// Creates a controller error from the numeric code in a response.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        Self { code: Some(code) }
    }

    /// Creates a controller error for an `Error` field without a numeric code.
    #[must_use]
    pub const fn unrecognized() -> Self {
        Self { code: None }
    }

    /// Returns the numeric code sent by the controller, if it sent one.
    #[must_use]
    pub const fn code(self) -> Option<i64> {
        self.code
    }

    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(self) -> ControllerErrorKind {
        match self.code {
            Some(code) => ControllerErrorKind::from_code(code),
            None => ControllerErrorKind::Undefined,
        }
    }

    /// Returns the fixed message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        self.kind().message()
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ControllerError {}

/// Errors related to HTTP communication with the controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed, including request timeouts.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller answered with a non-success HTTP status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The response body is not JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

/// Errors related to parsing controller responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload does not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response has no top-level `Value` field.
    #[error("bad response: missing `Value` field in {0}")]
    MissingValue(String),

    /// A legacy channel value arrived as an empty sequence.
    #[error("channel {channel} has an empty value sequence")]
    EmptyValueSequence {
        /// The channel id of the offending record.
        channel: u32,
    },

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
