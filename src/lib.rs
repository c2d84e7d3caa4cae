//! # affirm
//!
//! Precondition, state, and invariant checks bound to typed failure
//! families.
//!
//! Callers invoke named checks (`not_null`, `not_empty`, `inclusive_between`,
//! `matches_pattern`, `valid_index`, ...) against arguments, state, or
//! invariants. A failing check returns a descriptive, formatted error; a
//! passing check hands the validated value back unchanged so call sites can
//! chain.
//!
//! ## Quick Start
//!
//! ```
//! use affirm::require;
//!
//! fn window(lo: Option<i64>, hi: Option<i64>) -> Result<(i64, i64), affirm::RequireError> {
//!     let lo = require::not_null(lo)?;
//!     let hi = require::not_null(hi)?;
//!     require::is_true_msg(lo <= hi, "window {}..{} is inverted", &[&lo, &hi])?;
//!     Ok((lo, hi))
//! }
//!
//! assert_eq!(window(Some(3), Some(9)), Ok((3, 9)));
//! assert_eq!(
//!     window(Some(9), Some(3)).unwrap_err().to_string(),
//!     "window 9..3 is inverted",
//! );
//! ```
//!
//! ## Façades and families
//!
//! Every check is implemented once, in [`engine::Checker`], generic over the
//! [`Fault`](foundation::Fault) family it raises. Five façades bind that one
//! engine to five distinct error families:
//!
//! | Façade | Family | Marks |
//! |---|---|---|
//! | [`check`] | [`CheckError`] | general argument validation (canonical) |
//! | [`require`] | [`RequireError`] | preconditions |
//! | [`ensure`] | [`EnsureError`] | postconditions |
//! | [`invariant`] | [`InvariantError`] | internal invariants |
//! | [`bad_request`] | [`BadRequestError`] | request validation, maps to HTTP 400 |
//!
//! The families are structurally identical — five closed
//! [`FaultKind`](foundation::FaultKind)s — but each is a distinct type, so a
//! caller can match on the concrete family, or stay generic over
//! [`Fault`](foundation::Fault). Downstream crates can mint their own family
//! with [`fault_family!`] and expose it through [`facade!`].
//!
//! ## Messages
//!
//! Each operation has a default-message form and a `*_msg` form taking a
//! template with positional `{}` placeholders plus an argument slice:
//!
//! ```
//! use affirm::check;
//!
//! let err = check::is_true_msg(false, "Must be {}", &[&true]).unwrap_err();
//! assert_eq!(err.to_string(), "Must be true");
//! ```
//!
//! Passing `&[]` is identical to having no arguments, and message formatting
//! only runs on the failure path — a passing check never allocates.

pub mod engine;
pub mod facades;
pub mod families;
pub mod foundation;
mod macros;
pub mod prelude;

pub use facades::{bad_request, check, ensure, invariant, require};
pub use families::{BadRequestError, CheckError, EnsureError, InvariantError, RequireError};
pub use foundation::{Fault, FaultKind};
