// SPDX-License-Identifier: MPL-2.0
//! `lens_preview` provides image elements with graceful load/error states and
//! a zoom/pan/rotate preview overlay for the Iced GUI framework.
//!
//! Images are either standalone, each with its own overlay, or members of a
//! [`group::PreviewGroup`] that shares one overlay with circular next/previous
//! navigation.
//!
//! ```
//! use iced::Point;
//! use lens_preview::group::PreviewGroup;
//! use lens_preview::image::{ImageInstance, ImageOptions};
//! use lens_preview::ui::preview::Message;
//!
//! let group = PreviewGroup::new();
//! let mut first = ImageInstance::in_group(ImageOptions::new("a.png"), &group);
//! let _second = ImageInstance::in_group(ImageOptions::new("b.png"), &group);
//!
//! first.click(Point::new(10.0, 10.0));
//! group.handle(Message::Next);
//! assert_eq!(group.active_source().as_deref(), Some("b.png"));
//! ```

#![doc(html_root_url = "https://docs.rs/lens_preview/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod group;
pub mod image;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Fault, Result};
