//! Pattern expressions for msub.
//!
//! This module handles:
//! - Decoding `/`-separated positions and `,`-separated branches, with escapes
//! - Aligning a FROM expression with a TO expression into a replacement table

pub mod aligner;
pub mod decoder;

pub use aligner::{ReplacementTable, align};
pub use decoder::{ParseTree, Position, decode, escape_literal};
