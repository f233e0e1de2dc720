//! Input handling for msub.
//!
//! This module handles:
//! - Opening the input sources named on the command line
//! - Streaming lines through a compiled rule to the output

use crate::error::{MsubError, Result};
use crate::rules::Replacer;
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Open every input source and concatenate them into one stream.
///
/// All files are opened before anything is read, so a missing file aborts the
/// run before any output. No paths means standard input.
pub fn open_input(paths: &[PathBuf]) -> Result<Box<dyn Read>> {
	if paths.is_empty() {
		return Ok(Box::new(io::stdin()));
	}

	let mut input: Box<dyn Read> = Box::new(io::empty());
	for path in paths {
		input = Box::new(input.chain(open_source(path)?));
	}
	Ok(input)
}

fn open_source(path: &Path) -> Result<Box<dyn Read>> {
	if path.as_os_str() == STDIN_PATH {
		return Ok(Box::new(io::stdin()));
	}

	let file = File::open(path).map_err(|source| MsubError::InputOpen {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(Box::new(file))
}

/// Transform `input` line by line into `output`.
///
/// Each line is written, newline-terminated, before the next one is read. A
/// trailing `\r` is dropped along with the newline, and a last line without a
/// newline is still processed. Lines are raw bytes and need not be UTF-8.
pub fn substitute_lines<R: BufRead, W: Write>(
	replacer: &Replacer,
	mut input: R,
	output: &mut W,
) -> Result<()> {
	let mut line = Vec::new();

	loop {
		line.clear();
		let read = input
			.read_until(b'\n', &mut line)
			.map_err(|source| MsubError::InputRead { source })?;
		if read == 0 {
			break;
		}

		let text = line.strip_suffix(b"\n").unwrap_or(&line);
		let text = text.strip_suffix(b"\r").unwrap_or(text);

		output
			.write_all(&replacer.replace_all(text))
			.and_then(|()| output.write_all(b"\n"))
			.map_err(|source| MsubError::OutputWrite { source })?;
	}

	output
		.flush()
		.map_err(|source| MsubError::OutputWrite { source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::io::{BufReader, Cursor};

	fn run(replacer: &Replacer, input: &[u8]) -> Result<String> {
		let mut output = Vec::new();
		substitute_lines(replacer, Cursor::new(input), &mut output)?;
		Ok(String::from_utf8(output).unwrap())
	}

	#[test]
	fn test_substitute_lines() {
		let replacer = Replacer::new("true,false", "false,true", false).unwrap();
		let output = run(&replacer, b"true\nfalse\nmaybe\n").unwrap();
		assert_eq!(output, "false\ntrue\nmaybe\n");
	}

	#[test]
	fn test_last_line_without_newline() {
		let replacer = Replacer::new("a", "b", false).unwrap();
		assert_eq!(run(&replacer, b"a\na").unwrap(), "b\nb\n");
	}

	#[test]
	fn test_crlf_is_dropped() {
		let replacer = Replacer::new("a", "b", false).unwrap();
		assert_eq!(run(&replacer, b"a\r\nca\r\n").unwrap(), "b\ncb\n");
	}

	#[test]
	fn test_empty_input() {
		let replacer = Replacer::new("a", "b", false).unwrap();
		assert_eq!(run(&replacer, b"").unwrap(), "");
	}

	#[test]
	fn test_blank_lines_preserved() {
		let replacer = Replacer::new("a", "b", false).unwrap();
		assert_eq!(run(&replacer, b"\n\na\n").unwrap(), "\n\nb\n");
	}

	#[test]
	fn test_non_utf8_lines_pass_through() {
		let replacer = Replacer::new("a", "b", false).unwrap();
		let mut output = Vec::new();
		substitute_lines(&replacer, Cursor::new(&b"a\n\xe9a\na\n"[..]), &mut output).unwrap();
		assert_eq!(output, b"b\n\xe9b\nb\n");
	}

	#[test]
	fn test_read_error_is_reported() {
		struct FailingReader;

		impl Read for FailingReader {
			fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::other("disk on fire"))
			}
		}

		let replacer = Replacer::new("a", "b", false).unwrap();
		let mut output = Vec::new();
		let result = substitute_lines(&replacer, BufReader::new(FailingReader), &mut output);
		assert!(matches!(result, Err(MsubError::InputRead { .. })));
	}

	#[test]
	fn test_open_input_concatenates_files() {
		let temp_dir = tempfile::tempdir().unwrap();
		let first = temp_dir.path().join("first.txt");
		let second = temp_dir.path().join("second.txt");
		fs::write(&first, "dogs\n").unwrap();
		fs::write(&second, "cats\n").unwrap();

		let replacer = Replacer::new("dog,cat/s", "cat,dog/s", false).unwrap();
		let input = open_input(&[first, second]).unwrap();
		let mut output = Vec::new();
		substitute_lines(&replacer, BufReader::new(input), &mut output).unwrap();

		assert_eq!(String::from_utf8(output).unwrap(), "cats\ndogs\n");
	}

	#[test]
	fn test_open_input_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let present = temp_dir.path().join("present.txt");
		let missing = temp_dir.path().join("missing.txt");
		fs::write(&present, "x\n").unwrap();

		match open_input(&[present, missing.clone()]) {
			Err(MsubError::InputOpen { path, .. }) => assert_eq!(path, missing),
			Err(other) => panic!("Expected InputOpen error, got {other:?}"),
			Ok(_) => panic!("Expected InputOpen error"),
		}
	}
}
