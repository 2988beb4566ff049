// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front-end for the goban rules engine.
//!
//! Parses typed commands, forwards them to a [`goban_core::Game`] and renders
//! the resulting board and scoreboard as text or JSON.

pub mod command;
pub mod render;
pub mod session;

pub use command::{parse_command, Command};
pub use session::{Session, Step};
