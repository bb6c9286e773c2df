// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for exchanging messages with the controller.
//!
//! - [`HttpClient`]: posts envelopes to the EQOweb `default.aspx` endpoint
//!
//! Anything implementing [`Protocol`] can back a [`Client`](crate::Client),
//! which keeps the channel logic independent of the HTTP stack.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::command::{Command, Message};
use crate::error::{Error, ProtocolError};
use crate::response::Envelope;

/// Raw response to a message.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the body is malformed or carries a controller error
    /// code.
    pub fn envelope(&self) -> Result<Envelope, Error> {
        Envelope::parse(&self.body)
    }
}

/// Trait for transports that can deliver messages to the controller.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends an envelope and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send_message(&self, message: &Message) -> Result<CommandResponse, ProtocolError>;

    /// Sends a command and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.send_message(&command.to_message()).await
    }
}
