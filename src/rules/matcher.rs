use crate::error::{MsubError, Result};
use crate::pattern::ParseTree;
use regex::bytes::Regex;

/// Build the regex source for a FROM tree.
///
/// Each position becomes one capture group holding the alternation of its
/// escaped branch literals in declaration order. Groups are concatenated
/// directly, so adjacent positions match adjacent text. With `boundary`, ASCII
/// word boundaries are asserted around the whole match only.
pub fn matcher_source(tree: &ParseTree, boundary: bool) -> String {
	let body: String = tree
		.iter()
		.map(|position| {
			let alternatives: Vec<String> =
				position.branches().iter().map(|b| regex::escape(b)).collect();
			format!("({})", alternatives.join("|"))
		})
		.collect();

	if boundary {
		format!(r"(?-u:\b)(?:{body})(?-u:\b)")
	} else {
		body
	}
}

/// Compile a FROM tree into a single matcher.
///
/// Capture group `i + 1` of every match holds the text matched by position `i`.
pub fn compile_matcher(tree: &ParseTree, boundary: bool) -> Result<Regex> {
	compile_regex(&matcher_source(tree, boundary))
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| MsubError::MatcherCompile {
		pattern: pattern.to_string(),
		source,
	})
}
