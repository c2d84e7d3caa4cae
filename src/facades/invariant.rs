//! Invariant checks raising [`InvariantError`].
//!
//! For conditions that must hold between operations on a value — neither an
//! argument problem nor a return-value problem, but internal consistency.
//! `valid_state` is the idiomatic entry point here; the full operation set
//! is available regardless.

use crate::families::InvariantError;

crate::facade! { InvariantError }

#[cfg(test)]
mod tests {
    use crate::foundation::{Fault, FaultKind};

    struct RingBuffer {
        head: usize,
        len: usize,
        cap: usize,
    }

    impl RingBuffer {
        fn check_consistent(&self) -> Result<(), crate::InvariantError> {
            super::valid_state_msg(
                self.head < self.cap,
                "head {} escaped capacity {}",
                &[&self.head, &self.cap],
            )?;
            super::valid_state(self.len <= self.cap)
        }
    }

    #[test]
    fn holds_for_a_consistent_value() {
        let rb = RingBuffer { head: 2, len: 3, cap: 8 };
        assert!(rb.check_consistent().is_ok());
    }

    #[test]
    fn broken_invariant_is_illegal_state() {
        let rb = RingBuffer { head: 9, len: 3, cap: 8 };
        let err = rb.check_consistent().unwrap_err();
        assert_eq!(err.kind(), FaultKind::IllegalState);
        assert_eq!(err.message(), "head 9 escaped capacity 8");
    }
}
