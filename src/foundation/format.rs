//! Positional message formatting for failure templates.
//!
//! Substitution uses Rust's standard `{}` placeholder, consumed left to
//! right. The formatter is only ever invoked on the failure path, so a
//! passing check never pays for it.

use std::fmt::{Display, Write};

/// Formats `template` by substituting each `{}` with the next argument.
///
/// Surplus placeholders are left literal; surplus arguments are ignored.
/// There is no escaping beyond the placeholder syntax itself.
///
/// # Examples
///
/// ```
/// use affirm::foundation::format_message;
///
/// let msg = format_message("Must be {}", &[&true]);
/// assert_eq!(msg, "Must be true");
/// ```
#[must_use]
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut next = 0;

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if next < args.len() {
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", args[next]);
            next += 1;
        } else {
            out.push_str("{}");
        }
        rest = &rest[pos + 2..];
    }

    out.push_str(rest);
    out
}
