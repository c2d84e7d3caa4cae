//! The factory contract between the check engine and a failure family.
//!
//! The engine never names a concrete error type. Every failure path funnels
//! through exactly five factory hooks on [`Fault`]; a family implements the
//! five hooks bound to its own error variants and gets the complete check
//! surface for free. The taxonomy is closed — adding a sixth failure kind
//! means widening this trait for every family.

use std::error::Error as StdError;

/// Boxed underlying error carried by the with-cause kind.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// The closed set of failure kinds a check can raise.
///
/// Every family error maps onto exactly one of these, which lets callers
/// branch on the kind without naming the concrete family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// A generic argument check failed.
    IllegalArgument,
    /// A value that was required to be present was absent.
    NullValue,
    /// An index fell outside the valid range of a sequence.
    IndexOutOfBounds,
    /// A state invariant did not hold.
    IllegalState,
    /// An argument check failed because of an underlying error.
    IllegalArgumentWithCause,
}

/// Factory capability a failure family supplies to the check engine.
///
/// Implementations are total by construction: a family that misses a hook
/// does not compile, so "façade with a missing hook" is a compile-time
/// defect rather than a runtime one. Use the
/// [`fault_family!`](crate::fault_family) macro to derive a conforming enum
/// instead of implementing this by hand.
pub trait Fault: StdError + Sized + 'static {
    /// Materializes a generic argument failure.
    fn illegal_argument(message: String) -> Self;

    /// Materializes an absent-value failure.
    fn null_value(message: String) -> Self;

    /// Materializes an index-out-of-bounds failure.
    fn index_out_of_bounds(message: String) -> Self;

    /// Materializes a state-invariant failure.
    fn illegal_state(message: String) -> Self;

    /// Materializes an argument failure wrapping an underlying error.
    fn illegal_argument_with_cause(message: String, cause: Cause) -> Self;

    /// The kind this fault was constructed as.
    fn kind(&self) -> FaultKind;

    /// The fully formatted failure message.
    fn message(&self) -> &str;
}
