// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Player Simulator.
//!
//! An interactive, terminal-based simulation of a video platform's control
//! surface: browse and search a catalog of videos, play, pause and stop
//! them, keep named playlists, and flag videos for moderation.
//!
//! ## Architecture
//!
//! * The **Controller** ([`controller::Controller`]) owns all mutable state
//!   and enforces every rule. It returns structured results and never
//!   writes output itself.
//! * The **Catalog** ([`model::catalog`]) supplies the known videos.
//! * The **Session** ([`actions::session::Session`]) reads commands, hands
//!   them to the controller and renders the outcomes through
//!   [`render`].
//!
//! Everything runs on one thread, one command at a time.

pub mod actions;
pub mod commander;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod player;
pub mod render;
pub mod util;

pub use controller::Controller;
pub use error::ControlError;
pub use model::{
    Video,
    catalog::{Catalog, VideoLibrary},
};
