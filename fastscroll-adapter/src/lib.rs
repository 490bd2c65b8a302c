//! Adapter utilities for the `fastscroll` crate.
//!
//! The `fastscroll` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the small wiring layer adapters commonly
//! need:
//!
//! - [`ScrollHost`], the list interface the scroller consumes
//! - [`Controller`], the attach/detach lifecycle plus metrics refresh,
//!   touch dispatch, and per-frame ticking
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::ScrollHost;
