//! Macros that stamp out failure families and façades.
//!
//! The whole point of the engine/family split is that check logic exists
//! once. These macros keep the remaining boilerplate mechanical: a family is
//! one `fault_family!` invocation, a façade one `facade!` invocation.
//! Because every façade expands from the same token list, no façade can
//! silently miss an operation the others have.

/// Defines a failure-family enum and wires it to the five [`Fault`] hooks.
///
/// The generated enum has exactly the five closed kinds, derives
/// `thiserror::Error` (the calling crate needs `thiserror` as a dependency),
/// and implements [`Fault`] plus a `PartialEq` that compares kind and
/// message. The wrapped cause is deliberately excluded from equality — two
/// faults that read the same are the same for callers.
///
/// [`Fault`]: crate::foundation::Fault
///
/// # Examples
///
/// ```
/// affirm::fault_family! {
///     /// Failures raised while loading plugins.
///     pub enum PluginError;
/// }
///
/// affirm::facade! { PluginError }
///
/// assert!(not_null(Some("manifest")).is_ok());
/// ```
#[macro_export]
macro_rules! fault_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, ::thiserror::Error)]
        $vis enum $name {
            /// A generic argument check failed.
            #[error("{0}")]
            IllegalArgument(String),
            /// A value that was required to be present was absent.
            #[error("{0}")]
            NullValue(String),
            /// An index fell outside the valid range of a sequence.
            #[error("{0}")]
            IndexOutOfBounds(String),
            /// A state invariant did not hold.
            #[error("{0}")]
            IllegalState(String),
            /// An argument check failed because of an underlying error.
            #[error("{message}")]
            IllegalArgumentWithCause {
                /// The formatted failure message.
                message: String,
                /// The underlying error.
                #[source]
                cause: $crate::foundation::Cause,
            },
        }

        impl $crate::foundation::Fault for $name {
            fn illegal_argument(message: String) -> Self {
                Self::IllegalArgument(message)
            }

            fn null_value(message: String) -> Self {
                Self::NullValue(message)
            }

            fn index_out_of_bounds(message: String) -> Self {
                Self::IndexOutOfBounds(message)
            }

            fn illegal_state(message: String) -> Self {
                Self::IllegalState(message)
            }

            fn illegal_argument_with_cause(
                message: String,
                cause: $crate::foundation::Cause,
            ) -> Self {
                Self::IllegalArgumentWithCause { message, cause }
            }

            fn kind(&self) -> $crate::foundation::FaultKind {
                match self {
                    Self::IllegalArgument(_) => $crate::foundation::FaultKind::IllegalArgument,
                    Self::NullValue(_) => $crate::foundation::FaultKind::NullValue,
                    Self::IndexOutOfBounds(_) => {
                        $crate::foundation::FaultKind::IndexOutOfBounds
                    }
                    Self::IllegalState(_) => $crate::foundation::FaultKind::IllegalState,
                    Self::IllegalArgumentWithCause { .. } => {
                        $crate::foundation::FaultKind::IllegalArgumentWithCause
                    }
                }
            }

            fn message(&self) -> &str {
                match self {
                    Self::IllegalArgument(message)
                    | Self::NullValue(message)
                    | Self::IndexOutOfBounds(message)
                    | Self::IllegalState(message) => message,
                    Self::IllegalArgumentWithCause { message, .. } => message,
                }
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                use $crate::foundation::Fault as _;
                self.kind() == other.kind() && self.message() == other.message()
            }
        }
    };
}

/// Expands, in the current module, the full check surface bound to one
/// failure family: a `const CHECKER` engine instance plus a free function
/// per operation (default-message and `*_msg` form each).
///
/// # Examples
///
/// ```
/// mod guard {
///     affirm::facade! { affirm::CheckError }
/// }
///
/// assert_eq!(guard::inclusive_between(0, 9, 4), Ok(4));
/// ```
#[macro_export]
macro_rules! facade {
    ($family:ty) => {
        /// The process-wide engine instance backing this façade.
        pub const CHECKER: $crate::engine::Checker<$family> = $crate::engine::Checker::new();

        /// Checks that `expression` is true, failing as an illegal argument.
        #[inline]
        pub fn is_true(expression: bool) -> ::core::result::Result<(), $family> {
            CHECKER.is_true(expression)
        }

        /// [`is_true`] with a caller-supplied message template.
        #[inline]
        pub fn is_true_msg(
            expression: bool,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<(), $family> {
            CHECKER.is_true_msg(expression, message, args)
        }

        /// Checks that `expression` is false, failing as an illegal argument.
        #[inline]
        pub fn is_false(expression: bool) -> ::core::result::Result<(), $family> {
            CHECKER.is_false(expression)
        }

        /// [`is_false`] with a caller-supplied message template.
        #[inline]
        pub fn is_false_msg(
            expression: bool,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<(), $family> {
            CHECKER.is_false_msg(expression, message, args)
        }

        /// Checks that `value` is present and unwraps it.
        #[inline]
        pub fn not_null<T>(value: Option<T>) -> ::core::result::Result<T, $family> {
            CHECKER.not_null(value)
        }

        /// [`not_null`] with a caller-supplied message template.
        #[inline]
        pub fn not_null_msg<T>(
            value: Option<T>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<T, $family> {
            CHECKER.not_null_msg(value, message, args)
        }

        /// Checks that `value` is absent.
        #[inline]
        pub fn is_null<T>(value: Option<T>) -> ::core::result::Result<(), $family> {
            CHECKER.is_null(value)
        }

        /// [`is_null`] with a caller-supplied message template.
        #[inline]
        pub fn is_null_msg<T>(
            value: Option<T>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<(), $family> {
            CHECKER.is_null_msg(value, message, args)
        }

        /// Checks that a container is present and non-empty, returning it
        /// unchanged.
        #[inline]
        pub fn not_empty<C: $crate::foundation::Container>(
            value: Option<C>,
        ) -> ::core::result::Result<C, $family> {
            CHECKER.not_empty(value)
        }

        /// [`not_empty`] with a caller-supplied message template.
        #[inline]
        pub fn not_empty_msg<C: $crate::foundation::Container>(
            value: Option<C>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<C, $family> {
            CHECKER.not_empty_msg(value, message, args)
        }

        /// Checks that a character sequence is present and not
        /// all-whitespace, returning it unchanged.
        #[inline]
        pub fn not_blank<S: AsRef<str>>(
            value: Option<S>,
        ) -> ::core::result::Result<S, $family> {
            CHECKER.not_blank(value)
        }

        /// [`not_blank`] with a caller-supplied message template.
        #[inline]
        pub fn not_blank_msg<S: AsRef<str>>(
            value: Option<S>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<S, $family> {
            CHECKER.not_blank_msg(value, message, args)
        }

        /// Checks that every slot of a sequence is populated, returning the
        /// sequence unchanged.
        #[inline]
        pub fn no_null_elements<T, C: AsRef<[Option<T>]>>(
            value: Option<C>,
        ) -> ::core::result::Result<C, $family> {
            CHECKER.no_null_elements(value)
        }

        /// [`no_null_elements`] with a caller-supplied message template; the
        /// first offending index is appended to `args` before formatting.
        #[inline]
        pub fn no_null_elements_msg<T, C: AsRef<[Option<T>]>>(
            value: Option<C>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<C, $family> {
            CHECKER.no_null_elements_msg(value, message, args)
        }

        /// Checks that `index` addresses an element of a sequence, returning
        /// the sequence unchanged.
        #[inline]
        pub fn valid_index<C: $crate::foundation::Sequence>(
            value: Option<C>,
            index: usize,
        ) -> ::core::result::Result<C, $family> {
            CHECKER.valid_index(value, index)
        }

        /// [`valid_index`] with a caller-supplied message template.
        #[inline]
        pub fn valid_index_msg<C: $crate::foundation::Sequence>(
            value: Option<C>,
            index: usize,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<C, $family> {
            CHECKER.valid_index_msg(value, index, message, args)
        }

        /// Checks a state invariant, failing as an illegal state.
        #[inline]
        pub fn valid_state(expression: bool) -> ::core::result::Result<(), $family> {
            CHECKER.valid_state(expression)
        }

        /// [`valid_state`] with a caller-supplied message template.
        #[inline]
        pub fn valid_state_msg(
            expression: bool,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<(), $family> {
            CHECKER.valid_state_msg(expression, message, args)
        }

        /// Checks that `input` matches `pattern` in full, returning the
        /// input unchanged.
        #[inline]
        pub fn matches_pattern<'s>(
            input: &'s str,
            pattern: &$crate::foundation::Pattern,
        ) -> ::core::result::Result<&'s str, $family> {
            CHECKER.matches_pattern(input, pattern)
        }

        /// [`matches_pattern`] with a caller-supplied message template.
        #[inline]
        pub fn matches_pattern_msg<'s>(
            input: &'s str,
            pattern: &$crate::foundation::Pattern,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<&'s str, $family> {
            CHECKER.matches_pattern_msg(input, pattern, message, args)
        }

        /// [`matches_pattern`] compiling the pattern on the spot; an
        /// unparsable pattern fails with the compile error as cause.
        #[inline]
        pub fn matches_pattern_str<'s>(
            input: &'s str,
            pattern: &str,
        ) -> ::core::result::Result<&'s str, $family> {
            CHECKER.matches_pattern_str(input, pattern)
        }

        /// [`matches_pattern_str`] with a caller-supplied message template.
        #[inline]
        pub fn matches_pattern_str_msg<'s>(
            input: &'s str,
            pattern: &str,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<&'s str, $family> {
            CHECKER.matches_pattern_str_msg(input, pattern, message, args)
        }

        /// Checks that `start <= value <= end`, returning the value
        /// unchanged.
        #[inline]
        pub fn inclusive_between<T: ::core::cmp::PartialOrd + ::core::fmt::Display>(
            start: T,
            end: T,
            value: T,
        ) -> ::core::result::Result<T, $family> {
            CHECKER.inclusive_between(start, end, value)
        }

        /// [`inclusive_between`] with a caller-supplied message template.
        #[inline]
        pub fn inclusive_between_msg<T: ::core::cmp::PartialOrd>(
            start: T,
            end: T,
            value: T,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<T, $family> {
            CHECKER.inclusive_between_msg(start, end, value, message, args)
        }

        /// Checks that `start < value < end`, returning the value unchanged.
        #[inline]
        pub fn exclusive_between<T: ::core::cmp::PartialOrd + ::core::fmt::Display>(
            start: T,
            end: T,
            value: T,
        ) -> ::core::result::Result<T, $family> {
            CHECKER.exclusive_between(start, end, value)
        }

        /// [`exclusive_between`] with a caller-supplied message template.
        #[inline]
        pub fn exclusive_between_msg<T: ::core::cmp::PartialOrd>(
            start: T,
            end: T,
            value: T,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<T, $family> {
            CHECKER.exclusive_between_msg(start, end, value, message, args)
        }

        /// Checks that `value` is present and of concrete type `T`,
        /// returning the typed reference.
        #[inline]
        pub fn is_instance_of<'v, T: ::core::any::Any>(
            value: Option<&'v dyn ::core::any::Any>,
        ) -> ::core::result::Result<&'v T, $family> {
            CHECKER.is_instance_of(value)
        }

        /// [`is_instance_of`] with a caller-supplied message template.
        #[inline]
        pub fn is_instance_of_msg<'v, T: ::core::any::Any>(
            value: Option<&'v dyn ::core::any::Any>,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<&'v T, $family> {
            CHECKER.is_instance_of_msg(value, message, args)
        }

        /// Checks that `ty` is assignable to (identical to) `supertype`,
        /// returning `ty` unchanged.
        #[inline]
        pub fn is_assignable_from(
            supertype: $crate::foundation::TypeInfo,
            ty: $crate::foundation::TypeInfo,
        ) -> ::core::result::Result<$crate::foundation::TypeInfo, $family> {
            CHECKER.is_assignable_from(supertype, ty)
        }

        /// [`is_assignable_from`] with a caller-supplied message template.
        #[inline]
        pub fn is_assignable_from_msg(
            supertype: $crate::foundation::TypeInfo,
            ty: $crate::foundation::TypeInfo,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<$crate::foundation::TypeInfo, $family> {
            CHECKER.is_assignable_from_msg(supertype, ty, message, args)
        }

        /// Checks that `value` is not NaN, returning it unchanged.
        #[inline]
        pub fn not_nan(value: f64) -> ::core::result::Result<f64, $family> {
            CHECKER.not_nan(value)
        }

        /// [`not_nan`] with a caller-supplied message template.
        #[inline]
        pub fn not_nan_msg(
            value: f64,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<f64, $family> {
            CHECKER.not_nan_msg(value, message, args)
        }

        /// Checks that `value` is neither NaN nor infinite, returning it
        /// unchanged.
        #[inline]
        pub fn finite(value: f64) -> ::core::result::Result<f64, $family> {
            CHECKER.finite(value)
        }

        /// [`finite`] with a caller-supplied message template.
        #[inline]
        pub fn finite_msg(
            value: f64,
            message: &str,
            args: &[&dyn ::core::fmt::Display],
        ) -> ::core::result::Result<f64, $family> {
            CHECKER.finite_msg(value, message, args)
        }
    };
}
