//! Prelude module for convenient imports.
//!
//! A single `use affirm::prelude::*;` brings in the façade modules, the
//! family error types, and the traits needed to work with faults
//! generically.
//!
//! # Examples
//!
//! ```
//! use affirm::prelude::*;
//!
//! let port = require::inclusive_between(1024, 65535, 8080)?;
//! assert_eq!(port, 8080);
//! # Ok::<(), affirm::RequireError>(())
//! ```

// Façade modules — call sites read `require::not_null(..)`.
pub use crate::facades::{bad_request, check, ensure, invariant, require};

// Family error types, for signatures and selective catching.
pub use crate::families::{BadRequestError, CheckError, EnsureError, InvariantError, RequireError};

// Fault contract and supporting foundation types.
pub use crate::engine::Checker;
pub use crate::foundation::{Cause, Container, Fault, FaultKind, Pattern, Sequence, TypeInfo};
