//! The shared check engine.
//!
//! [`Checker`] implements every check exactly once, generic over the
//! [`Fault`] family it raises. A façade is nothing more than a `const`
//! `Checker` bound to one family plus free functions delegating to it; the
//! engine itself never names a concrete error type.
//!
//! Every operation comes in two forms: a default-message form and a `*_msg`
//! form taking a template plus a `&[&dyn Display]` argument slice. Passing
//! `&[]` is observably identical to having no arguments at all — the slice
//! is borrowed, so the success path allocates nothing and failure-message
//! formatting only ever happens after a check has already failed.
//!
//! On success every value-taking check hands its input back unchanged so
//! call sites can chain:
//!
//! ```
//! use affirm::engine::Checker;
//! use affirm::CheckError;
//!
//! const CHECK: Checker<CheckError> = Checker::new();
//!
//! fn connect(port: Option<u16>) -> Result<u16, CheckError> {
//!     let port = CHECK.inclusive_between(1024, 65535, CHECK.not_null(port)?)?;
//!     Ok(port)
//! }
//!
//! assert_eq!(connect(Some(8080)), Ok(8080));
//! assert!(connect(None).is_err());
//! ```

use std::any::{Any, type_name};
use std::fmt::Display;
use std::marker::PhantomData;

use crate::foundation::{
    Container, Fault, Pattern, Sequence, TypeInfo, first_null_index, format_message,
};

// Default templates. Exact wording is a compatibility contract — tests pin
// these literals.
const DEFAULT_IS_TRUE: &str = "The validated expression is false";
const DEFAULT_IS_FALSE: &str = "The validated expression is true";
const DEFAULT_NOT_NULL: &str = "The validated object is null";
const DEFAULT_IS_NULL: &str = "The validated object is not null";
const DEFAULT_NOT_BLANK: &str = "The validated character sequence is blank";
const DEFAULT_NO_NULL_ELEMENTS: &str = "The validated array contains null element at index: {}";
const DEFAULT_VALID_STATE: &str = "The validated state is false";
const DEFAULT_MATCHES_PATTERN: &str = "The string {} does not match the pattern {}";
const DEFAULT_INVALID_PATTERN: &str = "The pattern {} is invalid";
const DEFAULT_INCLUSIVE_BETWEEN: &str =
    "The value {} is not in the specified inclusive range of {} to {}";
const DEFAULT_EXCLUSIVE_BETWEEN: &str =
    "The value {} is not in the specified exclusive range of {} to {}";
const DEFAULT_IS_INSTANCE_OF: &str = "The validated object is not an instance of {}";
const DEFAULT_IS_ASSIGNABLE: &str = "Cannot assign a {} to a {}";
const DEFAULT_NOT_NAN: &str = "The validated value is not a number";
const DEFAULT_FINITE: &str = "The value is invalid: {}";

/// The check engine, generic over the failure family it raises.
///
/// Zero-sized and `const`-constructible; a façade holds one as a process-wide
/// constant. Immutable after construction, so freely shared across threads.
#[derive(Debug)]
pub struct Checker<F: Fault> {
    _family: PhantomData<F>,
}

// Manual impls: the derives would demand the same bounds of `F`, and the
// engine is copyable regardless of its family.
impl<F: Fault> Clone for Checker<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Fault> Copy for Checker<F> {}

impl<F: Fault> Default for Checker<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fault> Checker<F> {
    /// Creates the engine for family `F`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _family: PhantomData,
        }
    }

    // ── boolean expressions ──────────────────────────────────────────────

    /// Checks that `expression` is true, failing as an illegal argument.
    #[inline]
    pub fn is_true(&self, expression: bool) -> Result<(), F> {
        self.is_true_msg(expression, DEFAULT_IS_TRUE, &[])
    }

    /// [`is_true`](Self::is_true) with a caller-supplied message template.
    #[inline]
    pub fn is_true_msg(
        &self,
        expression: bool,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<(), F> {
        if expression {
            Ok(())
        } else {
            Err(F::illegal_argument(format_message(message, args)))
        }
    }

    /// Checks that `expression` is false, failing as an illegal argument.
    #[inline]
    pub fn is_false(&self, expression: bool) -> Result<(), F> {
        self.is_false_msg(expression, DEFAULT_IS_FALSE, &[])
    }

    /// [`is_false`](Self::is_false) with a caller-supplied message template.
    #[inline]
    pub fn is_false_msg(
        &self,
        expression: bool,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<(), F> {
        if expression {
            Err(F::illegal_argument(format_message(message, args)))
        } else {
            Ok(())
        }
    }

    // ── presence ─────────────────────────────────────────────────────────

    /// Checks that `value` is present and unwraps it.
    ///
    /// ```
    /// use affirm::check;
    ///
    /// assert_eq!(check::not_null(Some("id")), Ok("id"));
    /// ```
    #[inline]
    pub fn not_null<T>(&self, value: Option<T>) -> Result<T, F> {
        self.not_null_msg(value, DEFAULT_NOT_NULL, &[])
    }

    /// [`not_null`](Self::not_null) with a caller-supplied message template.
    #[inline]
    pub fn not_null_msg<T>(
        &self,
        value: Option<T>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<T, F> {
        value.ok_or_else(|| F::null_value(format_message(message, args)))
    }

    /// Checks that `value` is absent.
    #[inline]
    pub fn is_null<T>(&self, value: Option<T>) -> Result<(), F> {
        self.is_null_msg(value, DEFAULT_IS_NULL, &[])
    }

    /// [`is_null`](Self::is_null) with a caller-supplied message template.
    #[inline]
    pub fn is_null_msg<T>(
        &self,
        value: Option<T>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<(), F> {
        if value.is_some() {
            Err(F::illegal_argument(format_message(message, args)))
        } else {
            Ok(())
        }
    }

    // ── containers ───────────────────────────────────────────────────────

    /// Checks that a container is present and non-empty, returning it
    /// unchanged.
    ///
    /// An absent container is a null-value fault; a present-but-empty one is
    /// an illegal argument. The container-taking checks accept `Option<C>`
    /// (the same shape as [`not_null`](Self::not_null)); callers holding a
    /// plain value write `not_empty(Some(v))`.
    #[inline]
    pub fn not_empty<C: Container>(&self, value: Option<C>) -> Result<C, F> {
        match value {
            None => Err(F::null_value(format!("The validated {} is empty", C::NOUN))),
            Some(container) if container.is_empty() => Err(F::illegal_argument(format!(
                "The validated {} is empty",
                C::NOUN
            ))),
            Some(container) => Ok(container),
        }
    }

    /// [`not_empty`](Self::not_empty) with a caller-supplied message
    /// template, used verbatim for both the absent and the empty leg.
    #[inline]
    pub fn not_empty_msg<C: Container>(
        &self,
        value: Option<C>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<C, F> {
        match value {
            None => Err(F::null_value(format_message(message, args))),
            Some(container) if container.is_empty() => {
                Err(F::illegal_argument(format_message(message, args)))
            }
            Some(container) => Ok(container),
        }
    }

    /// Checks that a character sequence is present and contains at least one
    /// non-whitespace character, returning it unchanged.
    #[inline]
    pub fn not_blank<S: AsRef<str>>(&self, value: Option<S>) -> Result<S, F> {
        self.not_blank_msg(value, DEFAULT_NOT_BLANK, &[])
    }

    /// [`not_blank`](Self::not_blank) with a caller-supplied message
    /// template.
    #[inline]
    pub fn not_blank_msg<S: AsRef<str>>(
        &self,
        value: Option<S>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<S, F> {
        match value {
            None => Err(F::null_value(format_message(message, args))),
            Some(chars) if chars.as_ref().trim().is_empty() => {
                Err(F::illegal_argument(format_message(message, args)))
            }
            Some(chars) => Ok(chars),
        }
    }

    /// Checks that every slot of a sequence is populated, returning the
    /// sequence unchanged. The failure message names the first offending
    /// index.
    #[inline]
    pub fn no_null_elements<T, C>(&self, value: Option<C>) -> Result<C, F>
    where
        C: AsRef<[Option<T>]>,
    {
        let Some(container) = value else {
            return Err(F::null_value(DEFAULT_NOT_NULL.to_owned()));
        };
        match first_null_index(container.as_ref()) {
            None => Ok(container),
            Some(index) => Err(F::illegal_argument(format_message(
                DEFAULT_NO_NULL_ELEMENTS,
                &[&index],
            ))),
        }
    }

    /// [`no_null_elements`](Self::no_null_elements) with a caller-supplied
    /// message template.
    ///
    /// This is the one check that augments a custom message: the first
    /// offending index is appended to `args` before formatting, so a
    /// trailing `{}` in the template receives it.
    #[inline]
    pub fn no_null_elements_msg<T, C>(
        &self,
        value: Option<C>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<C, F>
    where
        C: AsRef<[Option<T>]>,
    {
        let Some(container) = value else {
            return Err(F::null_value(format_message(message, args)));
        };
        match first_null_index(container.as_ref()) {
            None => Ok(container),
            Some(index) => {
                let mut with_index: Vec<&dyn Display> = Vec::with_capacity(args.len() + 1);
                with_index.extend_from_slice(args);
                with_index.push(&index);
                Err(F::illegal_argument(format_message(message, &with_index)))
            }
        }
    }

    /// Checks that `index` addresses an element of a sequence, returning the
    /// sequence unchanged. Bounded by [`Sequence`] rather than
    /// [`Container`]: maps and sets have no positional index to validate.
    ///
    /// ```
    /// use affirm::check;
    ///
    /// assert_eq!(check::valid_index(Some(["Hi"]), 0), Ok(["Hi"]));
    /// assert!(check::valid_index(Some(["Hi"]), 1).is_err());
    /// ```
    #[inline]
    pub fn valid_index<C: Sequence>(&self, value: Option<C>, index: usize) -> Result<C, F> {
        let Some(container) = value else {
            return Err(F::null_value(DEFAULT_NOT_NULL.to_owned()));
        };
        if index < container.length() {
            Ok(container)
        } else {
            Err(F::index_out_of_bounds(format!(
                "The validated {} index is invalid: {}",
                C::NOUN,
                index
            )))
        }
    }

    /// [`valid_index`](Self::valid_index) with a caller-supplied message
    /// template.
    #[inline]
    pub fn valid_index_msg<C: Sequence>(
        &self,
        value: Option<C>,
        index: usize,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<C, F> {
        let Some(container) = value else {
            return Err(F::null_value(format_message(message, args)));
        };
        if index < container.length() {
            Ok(container)
        } else {
            Err(F::index_out_of_bounds(format_message(message, args)))
        }
    }

    // ── state ────────────────────────────────────────────────────────────

    /// Checks a state invariant, failing as an illegal state.
    #[inline]
    pub fn valid_state(&self, expression: bool) -> Result<(), F> {
        self.valid_state_msg(expression, DEFAULT_VALID_STATE, &[])
    }

    /// [`valid_state`](Self::valid_state) with a caller-supplied message
    /// template.
    #[inline]
    pub fn valid_state_msg(
        &self,
        expression: bool,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<(), F> {
        if expression {
            Ok(())
        } else {
            Err(F::illegal_state(format_message(message, args)))
        }
    }

    // ── patterns ─────────────────────────────────────────────────────────

    /// Checks that `input` matches `pattern` in full (whole-string
    /// semantics, not substring search), returning the input unchanged.
    ///
    /// Takes a pre-compiled [`Pattern`] so hot paths pay the compile cost
    /// once. Failure messages render the pattern as originally written.
    #[inline]
    pub fn matches_pattern<'s>(&self, input: &'s str, pattern: &Pattern) -> Result<&'s str, F> {
        if pattern.is_full_match(input) {
            Ok(input)
        } else {
            Err(F::illegal_argument(format_message(
                DEFAULT_MATCHES_PATTERN,
                &[&input, &pattern],
            )))
        }
    }

    /// [`matches_pattern`](Self::matches_pattern) with a caller-supplied
    /// message template.
    #[inline]
    pub fn matches_pattern_msg<'s>(
        &self,
        input: &'s str,
        pattern: &Pattern,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<&'s str, F> {
        if pattern.is_full_match(input) {
            Ok(input)
        } else {
            Err(F::illegal_argument(format_message(message, args)))
        }
    }

    /// [`matches_pattern`](Self::matches_pattern) compiling the pattern on
    /// the spot. An unparsable pattern fails as an illegal argument wrapping
    /// the compile error as its cause.
    ///
    /// Prefer [`matches_pattern`](Self::matches_pattern) with a pre-compiled
    /// [`Pattern`] on hot paths.
    #[inline]
    pub fn matches_pattern_str<'s>(&self, input: &'s str, pattern: &str) -> Result<&'s str, F> {
        match Pattern::new(pattern) {
            Ok(compiled) => self.matches_pattern(input, &compiled),
            Err(cause) => Err(F::illegal_argument_with_cause(
                format_message(DEFAULT_INVALID_PATTERN, &[&pattern]),
                Box::new(cause),
            )),
        }
    }

    /// [`matches_pattern_str`](Self::matches_pattern_str) with a
    /// caller-supplied message template, used verbatim for both the
    /// no-match and the invalid-pattern leg.
    #[inline]
    pub fn matches_pattern_str_msg<'s>(
        &self,
        input: &'s str,
        pattern: &str,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<&'s str, F> {
        match Pattern::new(pattern) {
            Ok(compiled) => self.matches_pattern_msg(input, &compiled, message, args),
            Err(cause) => Err(F::illegal_argument_with_cause(
                format_message(message, args),
                Box::new(cause),
            )),
        }
    }

    // ── ranges ───────────────────────────────────────────────────────────

    /// Checks that `start <= value <= end`, returning the value unchanged.
    #[inline]
    pub fn inclusive_between<T>(&self, start: T, end: T, value: T) -> Result<T, F>
    where
        T: PartialOrd + Display,
    {
        if value < start || value > end {
            Err(F::illegal_argument(format_message(
                DEFAULT_INCLUSIVE_BETWEEN,
                &[&value, &start, &end],
            )))
        } else {
            Ok(value)
        }
    }

    /// [`inclusive_between`](Self::inclusive_between) with a caller-supplied
    /// message template.
    #[inline]
    pub fn inclusive_between_msg<T>(
        &self,
        start: T,
        end: T,
        value: T,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<T, F>
    where
        T: PartialOrd,
    {
        if value < start || value > end {
            Err(F::illegal_argument(format_message(message, args)))
        } else {
            Ok(value)
        }
    }

    /// Checks that `start < value < end`, returning the value unchanged.
    /// Both bounds themselves fail.
    #[inline]
    pub fn exclusive_between<T>(&self, start: T, end: T, value: T) -> Result<T, F>
    where
        T: PartialOrd + Display,
    {
        if value <= start || value >= end {
            Err(F::illegal_argument(format_message(
                DEFAULT_EXCLUSIVE_BETWEEN,
                &[&value, &start, &end],
            )))
        } else {
            Ok(value)
        }
    }

    /// [`exclusive_between`](Self::exclusive_between) with a caller-supplied
    /// message template.
    #[inline]
    pub fn exclusive_between_msg<T>(
        &self,
        start: T,
        end: T,
        value: T,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<T, F>
    where
        T: PartialOrd,
    {
        if value <= start || value >= end {
            Err(F::illegal_argument(format_message(message, args)))
        } else {
            Ok(value)
        }
    }

    // ── type identity ────────────────────────────────────────────────────

    /// Checks that `value` is present and of concrete type `T`, returning
    /// the typed reference. An absent value never matches.
    #[inline]
    pub fn is_instance_of<'v, T: Any>(&self, value: Option<&'v dyn Any>) -> Result<&'v T, F> {
        match value.and_then(<dyn Any>::downcast_ref::<T>) {
            Some(typed) => Ok(typed),
            None => Err(F::illegal_argument(format_message(
                DEFAULT_IS_INSTANCE_OF,
                &[&type_name::<T>()],
            ))),
        }
    }

    /// [`is_instance_of`](Self::is_instance_of) with a caller-supplied
    /// message template.
    #[inline]
    pub fn is_instance_of_msg<'v, T: Any>(
        &self,
        value: Option<&'v dyn Any>,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<&'v T, F> {
        match value.and_then(<dyn Any>::downcast_ref::<T>) {
            Some(typed) => Ok(typed),
            None => Err(F::illegal_argument(format_message(message, args))),
        }
    }

    /// Checks that `ty` is assignable to `supertype`, returning `ty`
    /// unchanged.
    ///
    /// Rust exposes no runtime subtype relation, so assignability is
    /// [`TypeInfo`] identity — the strictest reading the language supports.
    #[inline]
    pub fn is_assignable_from(&self, supertype: TypeInfo, ty: TypeInfo) -> Result<TypeInfo, F> {
        if ty.id() == supertype.id() {
            Ok(ty)
        } else {
            Err(F::illegal_argument(format_message(
                DEFAULT_IS_ASSIGNABLE,
                &[&ty, &supertype],
            )))
        }
    }

    /// [`is_assignable_from`](Self::is_assignable_from) with a
    /// caller-supplied message template.
    #[inline]
    pub fn is_assignable_from_msg(
        &self,
        supertype: TypeInfo,
        ty: TypeInfo,
        message: &str,
        args: &[&dyn Display],
    ) -> Result<TypeInfo, F> {
        if ty.id() == supertype.id() {
            Ok(ty)
        } else {
            Err(F::illegal_argument(format_message(message, args)))
        }
    }

    // ── floating point ───────────────────────────────────────────────────

    /// Checks that `value` is not NaN, returning it unchanged.
    #[inline]
    pub fn not_nan(&self, value: f64) -> Result<f64, F> {
        self.not_nan_msg(value, DEFAULT_NOT_NAN, &[])
    }

    /// [`not_nan`](Self::not_nan) with a caller-supplied message template.
    #[inline]
    pub fn not_nan_msg(&self, value: f64, message: &str, args: &[&dyn Display]) -> Result<f64, F> {
        if value.is_nan() {
            Err(F::illegal_argument(format_message(message, args)))
        } else {
            Ok(value)
        }
    }

    /// Checks that `value` is neither NaN nor infinite, returning it
    /// unchanged.
    #[inline]
    pub fn finite(&self, value: f64) -> Result<f64, F> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(F::illegal_argument(format_message(
                DEFAULT_FINITE,
                &[&value],
            )))
        }
    }

    /// [`finite`](Self::finite) with a caller-supplied message template.
    #[inline]
    pub fn finite_msg(&self, value: f64, message: &str, args: &[&dyn Display]) -> Result<f64, F> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(F::illegal_argument(format_message(message, args)))
        }
    }
}
