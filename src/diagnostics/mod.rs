// SPDX-License-Identifier: MPL-2.0
//! Event notification and history for preview scopes.
//!
//! Every preview scope (a standalone image or a group) owns a [`Dispatcher`].
//! UI layers bind to a scope by subscribing a listener; every event also
//! lands in a memory-bounded history so hosts can inspect what happened.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`PreviewEvent`]: Enum of everything a scope reports
//! - [`Dispatcher`]: Listener registry with queued, in-order delivery

mod buffer;
mod dispatcher;
mod events;

pub use buffer::CircularBuffer;
pub use dispatcher::{Dispatcher, Listener, SubscriptionId};
pub use events::PreviewEvent;
