//! Brack Core - Grammar validation (pure logic, no IO)
//!
//! Contains the cursor and the recursive-descent grammar checker.
//! Only operates on in-memory text, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod cursor;
pub mod error;
pub mod grammar;

// Re-export common types
pub use cursor::{Cursor, Position};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use grammar::{check_text, validate_text, CheckOptions, CheckSummary, Form, GrammarChecker};

// Re-export config types from brack-config
pub use brack_config::{LimitConfig, Phase};
