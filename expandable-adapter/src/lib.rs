//! Adapter utilities for the `expandable` crate.
//!
//! The `expandable` crate is UI-agnostic and focuses on expansion state and index
//! translation. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - Timed, cancellable row animations behind the `TableHost` contract
//! - A clock-driven controller that reports expanding/contracting phases
//! - Row anchoring across expand/contract (keep the top row steady)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod queue;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{RowAnchor, capture_anchor, resolve_anchor};
pub use controller::Controller;
pub use queue::{AnimationQueue, RowTransition, TransitionKind};
pub use tween::{Easing, Timing};
