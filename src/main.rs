use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use msub::MsubError;
use msub::input::{open_input, substitute_lines};
use msub::rules::Replacer;

const AFTER_HELP: &str = r#"Syntax:
  pattern  = position {"/" position}
  position = branch {"," branch}
  branch   = {letter | "\/" | "\,"}

Examples:
  msub true,false false,true ./file
  msub dog,cat/s cat,dog/s ~/Document/questionnaire"#;

#[derive(Parser)]
#[command(name = "msub")]
#[command(
	version,
	about = "Substitute multiple words at once by FROM and TO patterns",
	after_help = AFTER_HELP,
	disable_version_flag = true
)]
struct Cli {
	/// Use word boundary in matcher
	#[arg(short, long)]
	boundary: bool,

	/// Output version information and exit
	#[allow(dead_code)]
	#[arg(short = 'v', long, action = ArgAction::Version)]
	version: Option<bool>,

	/// Pattern to search for
	#[arg(value_name = "FROM")]
	from: String,

	/// Pattern to substitute, aligned with FROM
	#[arg(value_name = "TO")]
	to: String,

	/// Files to read; standard input when none or "-"
	#[arg(value_name = "FILE")]
	files: Vec<PathBuf>,
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) if e.use_stderr() => {
			eprintln!("msub: {}", e.to_string().trim_end());
			return ExitCode::from(2);
		}
		Err(e) => {
			// --help and --version
			return match e.print() {
				Ok(()) => ExitCode::SUCCESS,
				Err(_) => ExitCode::FAILURE,
			};
		}
	};

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("msub: {e:#}");
			exit_code_for(&e)
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	let replacer = Replacer::new(&cli.from, &cli.to, cli.boundary)?;

	let input = open_input(&cli.files)?;
	let stdout = io::stdout();
	let mut output = stdout.lock();
	substitute_lines(&replacer, BufReader::new(input), &mut output)?;

	Ok(())
}

/// Usage and pattern errors exit with 2, I/O failures with 1.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
	let usage = error
		.chain()
		.find_map(|cause| cause.downcast_ref::<MsubError>())
		.is_some_and(MsubError::is_usage);

	if usage {
		ExitCode::from(2)
	} else {
		ExitCode::FAILURE
	}
}
