//! Precondition checks raising [`RequireError`].
//!
//! Use at the top of a function to reject bad arguments before any work
//! happens:
//!
//! ```
//! use affirm::require;
//!
//! fn spawn_workers(count: Option<usize>) -> Result<usize, affirm::RequireError> {
//!     let count = require::not_null(count)?;
//!     require::inclusive_between(1, 512, count)
//! }
//!
//! assert_eq!(spawn_workers(Some(8)), Ok(8));
//! assert!(spawn_workers(None).is_err());
//! ```

use crate::families::RequireError;

crate::facade! { RequireError }

#[cfg(test)]
mod tests {
    use crate::foundation::{Fault, FaultKind};

    #[test]
    fn failures_carry_the_require_family() {
        let err: crate::RequireError =
            super::is_true_msg(false, "shard {} is offline", &[&3]).unwrap_err();
        assert_eq!(err.kind(), FaultKind::IllegalArgument);
        assert_eq!(err.message(), "shard 3 is offline");
    }

    #[test]
    fn identity_is_preserved() {
        let buf = vec![1_u8, 2, 3];
        let back = super::not_empty(Some(buf.clone())).unwrap();
        assert_eq!(back, buf);
    }
}
