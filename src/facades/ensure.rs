//! Postcondition checks raising [`EnsureError`].
//!
//! The same operations as [`check`](crate::check), bound to a family that
//! marks the failure as the callee's fault: the function produced a value
//! that breaks its own contract.

use crate::families::EnsureError;

crate::facade! { EnsureError }
