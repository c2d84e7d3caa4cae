//! The five failure families the built-in façades raise.
//!
//! Every family is structurally identical — the five closed kinds from
//! [`FaultKind`](crate::foundation::FaultKind) — but each is a distinct type,
//! so a caller can tell a violated precondition from a violated postcondition
//! by the error type alone, or stay generic and branch on
//! [`Fault::kind`](crate::foundation::Fault::kind).

use crate::fault_family;

fault_family! {
    /// Failures raised by the canonical [`check`](crate::check) façade for
    /// general argument validation.
    pub enum CheckError;
}

fault_family! {
    /// Failures raised by the [`require`](crate::require) façade for
    /// preconditions at an API boundary.
    pub enum RequireError;
}

fault_family! {
    /// Failures raised by the [`ensure`](crate::ensure) façade for
    /// postconditions on values a function is about to hand back.
    pub enum EnsureError;
}

fault_family! {
    /// Failures raised by the [`invariant`](crate::invariant) façade for
    /// internal invariants that must hold between operations.
    pub enum InvariantError;
}

fault_family! {
    /// Failures raised by the [`bad_request`](crate::bad_request) façade.
    ///
    /// Framework-flavoured: intended for request-handling code that wants to
    /// surface a failed check as an HTTP 400 without translating error types
    /// at every call site.
    pub enum BadRequestError;
}

impl BadRequestError {
    /// The HTTP status every fault of this family maps to.
    pub const STATUS: u16 = 400;

    /// The HTTP status for this fault. Always [`Self::STATUS`]; the accessor
    /// exists so handler code can stay uniform across error types.
    #[must_use]
    pub const fn status(&self) -> u16 {
        Self::STATUS
    }
}
