//! The built-in façades: one module per failure family.
//!
//! All five expose the identical operation set — they expand from the same
//! [`facade!`](crate::facade) macro — and differ only in the error type they
//! return. `check` is the canonical façade; the conformance tests treat it
//! as the reference surface.

pub mod bad_request;
pub mod check;
pub mod ensure;
pub mod invariant;
pub mod require;
