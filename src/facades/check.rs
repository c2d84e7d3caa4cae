//! The canonical façade: general argument validation raising
//! [`CheckError`].
//!
//! ```
//! use affirm::check;
//!
//! fn resize(factor: f64, label: &str) -> Result<(), affirm::CheckError> {
//!     check::finite(factor)?;
//!     check::exclusive_between(0.0, 16.0, factor)?;
//!     check::not_blank(Some(label))?;
//!     Ok(())
//! }
//!
//! assert!(resize(2.0, "thumbnail").is_ok());
//! assert!(resize(f64::NAN, "thumbnail").is_err());
//! ```

use crate::families::CheckError;

crate::facade! { CheckError }
