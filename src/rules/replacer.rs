use crate::error::Result;
use crate::pattern::{ReplacementTable, align, decode};
use crate::rules::matcher::compile_matcher;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;

/// A compiled substitution rule: the FROM matcher plus its replacement table.
///
/// Built once from the FROM and TO expressions and then applied to every
/// input line. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Replacer {
	/// Matcher over the FROM tree, one capture group per position.
	matcher: Regex,

	/// FROM literal to TO literal, per position.
	table: ReplacementTable,

	/// Whether matches must start and end on a word boundary.
	boundary: bool,
}

impl Replacer {
	/// Decode and align both expressions, then compile the FROM matcher.
	pub fn new(from: &str, to: &str, boundary: bool) -> Result<Self> {
		let from_tree = decode(from)?;
		let to_tree = decode(to)?;
		let table = align(&from_tree, &to_tree)?;
		let matcher = compile_matcher(&from_tree, boundary)?;

		Ok(Replacer {
			matcher,
			table,
			boundary,
		})
	}

	pub fn boundary(&self) -> bool {
		self.boundary
	}

	pub fn table(&self) -> &ReplacementTable {
		&self.table
	}

	/// The compiled matcher's source text.
	pub fn as_str(&self) -> &str {
		self.matcher.as_str()
	}

	/// Replace every non-overlapping match in `line`.
	///
	/// Lines are bytes, not necessarily UTF-8; text outside matches is copied
	/// through untouched. Lines without a match are returned borrowed.
	pub fn replace_all<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
		self.matcher
			.replace_all(line, |caps: &Captures<'_>| self.expand(caps))
	}

	/// Build the replacement for one match, position by position.
	fn expand(&self, caps: &Captures<'_>) -> Vec<u8> {
		let mut replacement = Vec::with_capacity(caps.get(0).map_or(0, |m| m.as_bytes().len()));
		for position in 0..self.table.len() {
			let matched = caps.get(position + 1).map_or(&b""[..], |m| m.as_bytes());
			// Every group text is one of that position's FROM literals, so it is UTF-8.
			let target = std::str::from_utf8(matched)
				.ok()
				.and_then(|literal| self.table.lookup(position, literal))
				.map_or(matched, str::as_bytes);
			replacement.extend_from_slice(target);
		}
		replacement
	}
}
