// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EQOweb` Lib - A Rust library to control Qbus home-automation controllers.
//!
//! This library talks to the EQOweb HTTP/JSON interface of a Qbus controller:
//! it logs in, enumerates the controllable channels, writes channel values and
//! detects value changes by polling.
//!
//! # Supported Channels
//!
//! - **Outputs**: toggles, dimmers, shutters
//! - **Climate**: thermostat set points and programs, Renson ventilation
//! - **Other**: audio zones, scenes
//!
//! # Quick Start
//!
//! ```no_run
//! use eqoweb_lib::{Client, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> eqoweb_lib::Result<()> {
//!     let config = HttpConfig::new("192.168.1.50:8444").with_credentials("QBUS", "secret");
//!     let mut client = Client::new(config)?;
//!     client.login().await?;
//!
//!     for channel in client.channels(true).await? {
//!         println!("{channel}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Polling for Changes
//!
//! The controller does not push updates. Call [`Client::events`] on your own
//! schedule; it re-enumerates the channels and returns those whose value
//! differs from the previous snapshot.
//!
//! ```no_run
//! use std::time::Duration;
//! use eqoweb_lib::{Client, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> eqoweb_lib::Result<()> {
//!     let mut client = Client::new(HttpConfig::new("192.168.1.50:8444"))?;
//!     client.login().await?;
//!     client.channels(true).await?;
//!
//!     loop {
//!         for event in client.events().await?.values() {
//!             println!("changed: {}", event.channel());
//!         }
//!         tokio::time::sleep(Duration::from_secs(1)).await;
//!     }
//! }
//! ```

mod channel;
mod client;
pub mod command;
pub mod error;
pub mod event;
pub mod protocol;
pub mod response;
pub mod types;

pub use channel::{Channel, ChannelMap};
#[cfg(feature = "http")]
pub use client::ClientBuilder;
pub use client::{Client, SessionState};
pub use command::{
    Command, CommandCode, GetGroupsCommand, LoginCommand, Message, SetStatusCommand,
};
pub use error::{
    ControllerError, ControllerErrorKind, Error, ParseError, ProtocolError, Result,
};
pub use event::ChannelEvent;
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{CommandResponse, Protocol};
pub use types::{ChannelId, ChannelType, RawValue};
