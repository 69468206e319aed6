//! Brack grammar checker
//!
//! Recognizes a stream of top-level values (atoms and the four bracket forms)
//! without building a tree.

mod checker;
mod form;

pub use checker::{CheckOptions, CheckSummary, GrammarChecker};
pub use form::{is_bracket, is_closing_bracket, Form};

use crate::error::ParseResult;

/// Validates a whole document, returning the first grammar violation.
pub fn validate_text(text: &str) -> ParseResult<()> {
    GrammarChecker::new(text).check().map(|_| ())
}

/// Validates a whole document with explicit options and reports what was seen.
pub fn check_text(text: &str, options: CheckOptions) -> ParseResult<CheckSummary> {
    GrammarChecker::with_options(text, options).check()
}
