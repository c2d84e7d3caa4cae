//! Request-validation checks raising [`BadRequestError`].
//!
//! The framework-flavoured façade: the same operations, bound to a family
//! that handler code can map straight to an HTTP 400 response via
//! [`BadRequestError::status`].
//!
//! ```
//! use affirm::bad_request;
//!
//! fn page_size(raw: Option<u32>) -> Result<u32, affirm::BadRequestError> {
//!     let size = bad_request::not_null_msg(raw, "page_size is required", &[])?;
//!     bad_request::inclusive_between_msg(1, 100, size, "page_size must be 1..=100", &[])
//! }
//!
//! let err = page_size(Some(500)).unwrap_err();
//! assert_eq!(err.status(), 400);
//! assert_eq!(err.to_string(), "page_size must be 1..=100");
//! ```

use crate::families::BadRequestError;

crate::facade! { BadRequestError }

#[cfg(test)]
mod tests {
    use crate::foundation::{Fault, FaultKind};

    #[test]
    fn every_kind_still_maps_to_400() {
        let err: crate::BadRequestError = super::not_null(None::<&str>).unwrap_err();
        assert_eq!(err.status(), 400);
        let err = super::valid_index(Some([0_u8; 2]), 7).unwrap_err();
        assert_eq!(err.kind(), FaultKind::IndexOutOfBounds);
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn pattern_checks_guard_request_fields() {
        let slug = crate::foundation::Pattern::new("[a-z0-9-]+").unwrap();
        assert_eq!(super::matches_pattern("blog-42", &slug), Ok("blog-42"));
        assert!(super::matches_pattern("Blog!", &slug).is_err());
    }
}
