//! A headless expandable/collapsible sectioned list.
//!
//! For adapter-level utilities (row animations, a clock-driven controller, anchoring), see
//! the `expandable-adapter` crate.
//!
//! Sections are shown as a group cell followed, when expanded, by their child rows. The core
//! of this crate is the translation between the flat list the toolkit renders
//! ([`VisualRow`]) and the `(section, row)` model the application provides ([`IndexPath`]),
//! kept consistent while sections expand, contract, and optionally ungroup single-row
//! sections into their only child.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`DataSource`] for counts and cells
//! - optionally a [`Delegate`] for expansion/selection/display hooks
//! - a [`TableHost`] that applies row insert/delete/reload requests
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod forward;
mod options;
mod source;
mod state;
mod table;
mod translate;
mod types;


pub use options::TableOptions;
pub use source::{DataSource, Delegate, NoDelegate, NoopHost, TableHost};
pub use state::{ExpansionSet, ExpansionSnapshot};
pub use table::ExpandableTable;
pub use translate::{Layout, Rows, SectionShape};
pub use types::{
    EditingStyle, IndexPath, Outcome, RowAnimation, RowSlot, SectionPhase, Selection,
    VisualRange, VisualRow,
};
