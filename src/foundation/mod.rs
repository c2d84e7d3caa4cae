//! Core building blocks shared by every check.
//!
//! - [`Fault`] / [`FaultKind`] — the five-hook factory contract a failure
//!   family implements.
//! - [`format_message`] — positional failure-message formatting.
//! - [`first_null_index`] — absent-element scanning.
//! - [`Container`] / [`Sequence`] — the length-bearing inputs of the
//!   emptiness and index checks.
//! - [`Pattern`] — whole-string regular expressions for the match checks.
//! - [`TypeInfo`] — runtime type identity for the reflective checks.
//!
//! Nothing here raises failures on its own; these are the pure leaves the
//! [engine](crate::engine) is assembled from.

pub mod container;
pub mod fault;
pub mod format;
pub mod pattern;
pub mod scan;
pub mod type_info;

pub use container::{Container, Sequence};
pub use fault::{Cause, Fault, FaultKind};
pub use format::format_message;
pub use pattern::Pattern;
pub use scan::first_null_index;
pub use type_info::TypeInfo;
