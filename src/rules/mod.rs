//! Matching and substitution for msub.
//!
//! This module handles:
//! - Compiling a FROM tree into a single matcher
//! - Applying a compiled rule to input lines

pub mod matcher;
pub mod replacer;

pub use matcher::{compile_matcher, matcher_source};
pub use replacer::Replacer;
