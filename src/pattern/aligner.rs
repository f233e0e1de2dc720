use crate::error::{MsubError, Result};
use crate::pattern::decoder::ParseTree;
use std::collections::HashMap;

/// Per-position mapping from each FROM branch literal to its TO counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
	positions: Vec<HashMap<String, String>>,
}

impl ReplacementTable {
	/// Number of positions covered by the table.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Look up the replacement for `literal` at `position`.
	pub fn lookup(&self, position: usize, literal: &str) -> Option<&str> {
		self.positions
			.get(position)
			.and_then(|map| map.get(literal))
			.map(String::as_str)
	}
}

/// Align a FROM tree with a TO tree, pairing branches in declaration order.
///
/// Both trees must have the same number of positions and, position by
/// position, the same number of branches. FROM branches must be unique within
/// their position, otherwise a match could not be mapped back unambiguously.
pub fn align(from: &ParseTree, to: &ParseTree) -> Result<ReplacementTable> {
	if from.len() != to.len() {
		return Err(MsubError::SequenceCountMismatch {
			from: from.len(),
			to: to.len(),
		});
	}

	let positions = from
		.iter()
		.zip(to.iter())
		.enumerate()
		.map(|(position, (from_position, to_position))| {
			if from_position.len() != to_position.len() {
				return Err(MsubError::BranchCountMismatch {
					position,
					from: from_position.len(),
					to: to_position.len(),
				});
			}

			let mut map = HashMap::with_capacity(from_position.len());
			for (literal, replacement) in from_position.branches().iter().zip(to_position.branches()) {
				if map.insert(literal.clone(), replacement.clone()).is_some() {
					return Err(MsubError::DuplicateBranch {
						position,
						literal: literal.clone(),
					});
				}
			}
			Ok(map)
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(ReplacementTable { positions })
}
