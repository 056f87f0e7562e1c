// SPDX-License-Identifier: MPL-2.0
//! Image elements: load tracking, options and lifecycle.

mod instance;
pub mod load_state;
mod options;

pub use instance::ImageInstance;
pub use load_state::{LoadState, LoadStatus};
pub(crate) use options::open_change_listener;
pub use options::{ImageOptions, OpenChangeCallback, Placeholder, PreviewOptions};
