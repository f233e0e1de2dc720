use crate::error::{MsubError, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Separates positions in a pattern expression.
pub const POSITION_SEPARATOR: char = '/';

/// Separates branches within a position.
pub const BRANCH_SEPARATOR: char = ',';

/// Introduces an escape sequence.
pub const ESCAPE: char = '\\';

/// One `/`-delimited slot of a pattern, holding its literal alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
	branches: Vec<String>,
}

impl Position {
	/// The decoded branch literals, in declaration order.
	pub fn branches(&self) -> &[String] {
		&self.branches
	}

	pub fn len(&self) -> usize {
		self.branches.len()
	}

	/// Whether the position holds no branches.
	pub fn is_empty(&self) -> bool {
		self.branches.is_empty()
	}
}

/// A decoded pattern expression: the ordered sequence of its positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
	positions: Vec<Position>,
}

impl ParseTree {
	pub fn positions(&self) -> &[Position] {
		&self.positions
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// Whether the tree holds no positions.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Position> {
		self.positions.iter()
	}
}

impl<'a> IntoIterator for &'a ParseTree {
	type Item = &'a Position;
	type IntoIter = std::slice::Iter<'a, Position>;

	fn into_iter(self) -> Self::IntoIter {
		self.positions.iter()
	}
}

/// Decode a pattern expression into its positions and branches.
///
/// The expression is walked once, character by character. Unescaped `/` and
/// `,` are structural; everything else, including escaped separators, lands
/// in the current branch as literal text. An empty expression yields a
/// single position with a single empty branch.
pub fn decode(expr: &str) -> Result<ParseTree> {
	let mut positions = Vec::new();
	let mut branches = Vec::new();
	let mut current = String::new();
	let mut chars = expr.char_indices().peekable();

	while let Some((offset, c)) = chars.next() {
		match c {
			ESCAPE => current.push(decode_escape(expr, offset, &mut chars)?),
			BRANCH_SEPARATOR => branches.push(std::mem::take(&mut current)),
			POSITION_SEPARATOR => {
				branches.push(std::mem::take(&mut current));
				positions.push(Position {
					branches: std::mem::take(&mut branches),
				});
			}
			_ => current.push(c),
		}
	}

	branches.push(current);
	positions.push(Position { branches });

	Ok(ParseTree { positions })
}

/// Escape a literal so that `decode` yields it back as a single branch.
pub fn escape_literal(literal: &str) -> String {
	let mut escaped = String::with_capacity(literal.len());
	for c in literal.chars() {
		if matches!(c, ESCAPE | BRANCH_SEPARATOR | POSITION_SEPARATOR) {
			escaped.push(ESCAPE);
		}
		escaped.push(c);
	}
	escaped
}

/// Decode the escape sequence whose backslash sits at `offset`.
fn decode_escape(
	expr: &str,
	offset: usize,
	chars: &mut Peekable<CharIndices<'_>>,
) -> Result<char> {
	let fail = |reason: &str| MsubError::PatternDecode {
		expr: expr.to_string(),
		position: offset,
		reason: reason.to_string(),
	};

	let Some((_, c)) = chars.next() else {
		return Err(fail("trailing backslash"));
	};

	let decoded = match c {
		'a' => '\x07',
		'b' => '\x08',
		'f' => '\x0c',
		'n' => '\n',
		'r' => '\r',
		't' => '\t',
		'v' => '\x0b',
		'x' => read_digits(chars, 16, 2, 0)
			.filter(|&value| value <= 0x7f)
			.and_then(char::from_u32)
			.ok_or_else(|| fail(r"\x needs two hex digits no greater than 7f"))?,
		'u' => read_digits(chars, 16, 4, 0)
			.and_then(char::from_u32)
			.ok_or_else(|| fail(r"\u needs four hex digits naming a valid character"))?,
		'U' => read_digits(chars, 16, 8, 0)
			.and_then(char::from_u32)
			.ok_or_else(|| fail(r"\U needs eight hex digits naming a valid character"))?,
		'0'..='7' => c
			.to_digit(8)
			.and_then(|first| read_digits(chars, 8, 2, first))
			.filter(|&value| value <= 0o177)
			.and_then(char::from_u32)
			.ok_or_else(|| fail("octal escape needs three digits no greater than 177"))?,
		other => other,
	};

	Ok(decoded)
}

/// Consume exactly `count` digits of `radix`, accumulating onto `value`.
fn read_digits(
	chars: &mut Peekable<CharIndices<'_>>,
	radix: u32,
	count: usize,
	mut value: u32,
) -> Option<u32> {
	for _ in 0..count {
		let digit = chars.peek().and_then(|&(_, c)| c.to_digit(radix))?;
		chars.next();
		value = value * radix + digit;
	}
	Some(value)
}
