use std::path::PathBuf;

/// Library-level structured errors for msub.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MsubError {
	#[error("invalid escape at byte {position} in pattern {expr:?}: {reason}")]
	PatternDecode {
		expr: String,
		position: usize,
		reason: String,
	},

	#[error("mismatch the number of sequences (FROM has {from}, TO has {to})")]
	SequenceCountMismatch { from: usize, to: usize },

	#[error("mismatch the number of branches at position {position} (FROM has {from}, TO has {to})")]
	BranchCountMismatch {
		position: usize,
		from: usize,
		to: usize,
	},

	#[error("position {position} has duplicate branch {literal:?}")]
	DuplicateBranch { position: usize, literal: String },

	#[error("failed to compile matcher: {pattern}")]
	MatcherCompile {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("{path}")]
	InputOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read input")]
	InputRead {
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write output")]
	OutputWrite {
		#[source]
		source: std::io::Error,
	},
}

impl MsubError {
	/// Whether this error comes from bad patterns rather than I/O.
	///
	/// The CLI exits with status 2 for usage errors and 1 for everything else.
	pub fn is_usage(&self) -> bool {
		!matches!(
			self,
			MsubError::InputOpen { .. } | MsubError::InputRead { .. } | MsubError::OutputWrite { .. }
		)
	}
}

/// Result type alias using MsubError.
pub type Result<T> = std::result::Result<T, MsubError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_construction_errors_are_usage_errors() {
		let err = MsubError::BranchCountMismatch {
			position: 0,
			from: 2,
			to: 1,
		};
		assert!(err.is_usage());

		let err = MsubError::PatternDecode {
			expr: r"a\".to_string(),
			position: 1,
			reason: "trailing backslash".to_string(),
		};
		assert!(err.is_usage());
	}

	#[test]
	fn test_io_errors_are_not_usage_errors() {
		let err = MsubError::InputOpen {
			path: PathBuf::from("missing.txt"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
		};
		assert!(!err.is_usage());
		assert_eq!(err.to_string(), "missing.txt");
	}

	#[test]
	fn test_branch_count_message_names_position() {
		let err = MsubError::BranchCountMismatch {
			position: 3,
			from: 2,
			to: 1,
		};
		assert!(err.to_string().contains("position 3"));
	}
}
