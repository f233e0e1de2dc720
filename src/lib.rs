//! msub - substitute multiple words at once by FROM and TO patterns.
//!
//! This library provides the core functionality for msub, including:
//! - Pattern expression decoding and FROM/TO alignment
//! - Compiling a FROM expression into a single matcher
//! - Line-by-line substitution over concatenated inputs
//!
//! # Example
//!
//! ```
//! use msub::rules::Replacer;
//!
//! let replacer = Replacer::new("dog,cat/s", "cat,dog/s", false).unwrap();
//! let line = replacer.replace_all(b"dogs and cats");
//! assert_eq!(line, &b"cats and dogs"[..]);
//! ```

pub mod error;
pub mod input;
pub mod pattern;
pub mod rules;

pub use error::{MsubError, Result};
pub use rules::Replacer;
