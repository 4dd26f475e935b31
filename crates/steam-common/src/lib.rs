// This crate is part of the steam-common project.
//
// Copyright (C) 2025  the steam-common authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see https://www.gnu.org/licenses.

//! Common value types for the Steam platform.
//!
//! The centerpiece is [`SteamId`], the bit-packed 64-bit identifier for accounts, groups,
//! lobbies, and chat rooms, together with its two textual renderings (the legacy
//! `STEAM_X:Y:Z` format and the modern `[W:X:Y]` format). The [`AccountType`], [`Universe`],
//! and [`Instance`] types describe the fields packed into an ID, and [`AppId`], [`PackageId`],
//! and [`DepotId`] are the plain numeric IDs used by the product catalog.
//!
//! Everything in this crate is a pure value type with no I/O and no global state; every type
//! is `Copy` and safe to share across threads.

#[macro_use]
extern crate thiserror;

pub mod steam_id;

#[doc(inline)]
pub use steam_id::SteamId;

pub mod account_type;

#[doc(inline)]
pub use account_type::AccountType;

pub mod universe;

#[doc(inline)]
pub use universe::Universe;

pub mod instance;

#[doc(inline)]
pub use instance::Instance;

pub mod app;

#[doc(inline)]
pub use app::AppId;

pub mod package;

#[doc(inline)]
pub use package::PackageId;

pub mod depot;

#[doc(inline)]
pub use depot::DepotId;
