// SPDX-License-Identifier: MPL-2.0
//! Preview user interface.
//!
//! Follows the Elm-style "state down, messages up" pattern: components take
//! a `Message`, update their state and return an `Effect` for the owner.
//!
//! - [`preview`] - Overlay state machine, host policy, toolbar and input mapping
//! - [`state`] - Reusable value types (zoom, rotation, drag, viewport, transform)

pub mod preview;
pub mod state;
