// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for EQOweb channels.
//!
//! # Types
//!
//! - [`ChannelId`] - Numeric channel identifier (`Chnl`)
//! - [`ChannelType`] - Channel kind derived from the icon code (`Ico`)
//! - [`RawValue`] - Channel value in its scalar or legacy sequence shape (`Val`)

mod channel_id;
mod channel_type;
mod raw_value;

pub use channel_id::ChannelId;
pub use channel_type::ChannelType;
pub use raw_value::RawValue;
