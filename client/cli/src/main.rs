mod logger;
mod replay;

use anyhow::{Context, Result};
use clap::Parser;
use graphite_response_handler::ResponseType;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphite-cli")]
#[command(about = "Replay recorded editor responses through the frontend response handler")]
struct Args {
	/// JSON lines file with one `{"identifier": "<Origin>::<ResponseType>", "data": {...}}` object per line (defaults to stdin)
	input: Option<PathBuf>,

	/// Only register handlers for these response types (defaults to all of them)
	#[arg(long = "handle", value_parser = parse_response_type)]
	handle: Vec<ResponseType>,

	/// Most verbose log level to print
	#[arg(short, long, default_value = "info")]
	log_level: log::LevelFilter,
}

fn parse_response_type(name: &str) -> Result<ResponseType, String> {
	ResponseType::from_name(name).ok_or_else(|| format!("unknown response type \"{name}\", expected one of: {}", ResponseType::ALL.map(|response_type| response_type.name()).join(", ")))
}

fn main() -> Result<()> {
	let args = Args::parse();
	logger::init_logger(args.log_level)?;

	let handled_types = if args.handle.is_empty() { ResponseType::ALL.to_vec() } else { args.handle };

	let summary = match &args.input {
		Some(path) => {
			let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
			replay::replay(BufReader::new(file), &handled_types)?
		}
		None => replay::replay(io::stdin().lock(), &handled_types)?,
	};

	log::info!(
		"Read {} responses: {} handled, {} dropped, {} lines skipped",
		summary.read,
		summary.handled,
		summary.dropped,
		summary.skipped
	);

	Ok(())
}
