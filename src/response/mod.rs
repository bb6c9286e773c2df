// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for EQOweb JSON responses.
//!
//! Every response body is first decoded as an [`Envelope`], which surfaces
//! embedded controller errors. The payload is then read into the typed
//! response matching the request.

mod envelope;
mod groups;
mod login;

pub use envelope::Envelope;
pub use groups::{ChannelRecord, GroupRecord, GroupsResponse};
pub use login::LoginResponse;
