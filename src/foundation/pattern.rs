//! Whole-string patterns for the match checks.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

/// A regular expression compiled for whole-string matching.
///
/// The match checks require the entire input to be in the pattern's language,
/// and a plain [`Regex`] search cannot decide that: `find` is leftmost-first,
/// so `a|ab` run against `"ab"` reports the one-byte match `a` even though the
/// whole input is also accepted. Compiling the text as `^(?:pattern)$` makes
/// the automaton itself answer the whole-string question.
///
/// The original, unanchored text is kept alongside the compiled form, and
/// [`fmt::Display`] renders it, so failure messages show the pattern the
/// caller wrote.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    source: Box<str>,
}

impl Pattern {
    /// Compiles `pattern` for whole-string matching.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            regex,
            source: pattern.into(),
        })
    }

    /// True when `input` as a whole is in the pattern's language.
    #[must_use]
    pub fn is_full_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The pattern text as originally written, without the anchoring.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_entire_input_only() {
        let pat = Pattern::new("[0-9]+").unwrap();
        assert!(pat.is_full_match("123"));
        assert!(!pat.is_full_match("123x"));
        assert!(!pat.is_full_match("x123"));
    }

    #[test]
    fn alternation_is_not_cut_short_by_an_earlier_branch() {
        // Leftmost-first search would stop at `a`; the whole input must
        // still be accepted through the longer branch.
        let pat = Pattern::new("a|ab").unwrap();
        assert!(pat.is_full_match("a"));
        assert!(pat.is_full_match("ab"));
        assert!(!pat.is_full_match("abc"));
    }

    #[test]
    fn display_renders_the_original_text() {
        let pat = Pattern::new("[a-z]+").unwrap();
        assert_eq!(pat.to_string(), "[a-z]+");
        assert_eq!(pat.as_str(), "[a-z]+");
    }

    #[test]
    fn empty_pattern_matches_only_the_empty_string() {
        let pat = Pattern::new("").unwrap();
        assert!(pat.is_full_match(""));
        assert!(!pat.is_full_match("a"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(Pattern::new("(unclosed").is_err());
        assert!("(unclosed".parse::<Pattern>().is_err());
    }
}
