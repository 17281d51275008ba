//! Aide - null-safe helpers over strings, characters, arrays, and charsets
//!
//! Aide provides small, pure, stateless helper functions in the spirit of
//! Apache Commons Lang and Google Guava:
//! - Emptiness/blankness checks and quantifiers over many sequences
//! - Case and character-class classification (alpha, numeric, whitespace, ...)
//! - Charset resolution and null-safe byte encoding
//! - Substring search with a `-1` "not found" sentinel
//!
//! Absence is a valid input everywhere: every function takes `Option<&str>`
//! (or an optional slice of optional sequences) and has a documented truth
//! table for `None` and `""` instead of a panicking precondition.

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod array;
pub mod chars;
pub mod charset;
pub mod error;
pub mod sequence;
pub mod string;

// Re-export main types for public API
pub use error::{Error, Result};
pub use sequence::INDEX_NOT_FOUND;

// Re-export commonly used external types
pub use encoding_rs::{Encoding, UTF_8};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sequence::INDEX_NOT_FOUND;
    pub use crate::{array, chars, charset, sequence, string};
    pub use encoding_rs::{Encoding, UTF_8};
}
