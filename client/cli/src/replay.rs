use anyhow::{Context, Result};
use graphite_response_handler::{Response, ResponseHandler, ResponseType};
use serde::Deserialize;
use serde_json::Value;
use std::cell::Cell;
use std::io::BufRead;
use std::rc::Rc;

/// One response as the editor backend sent it, captured as a line of JSON.
#[derive(Debug, Deserialize)]
pub struct RecordedResponse {
	pub identifier: String,
	pub data: Value,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
	/// Recorded responses that were fed to the response handler
	pub read: usize,
	pub handled: usize,
	/// Responses that could not be parsed or had no handler
	pub dropped: usize,
	/// Lines that were not a recorded response at all
	pub skipped: usize,
}

/// Feeds every recorded response in `input` through a fresh response handler with logging handlers for `handled_types`.
pub fn replay(input: impl BufRead, handled_types: &[ResponseType]) -> Result<ReplaySummary> {
	let handled = Rc::new(Cell::new(0));

	let mut handler = ResponseHandler::new();
	handler.attach();
	for &response_type in handled_types {
		let handled = handled.clone();
		handler.register_response_handler(response_type, move |response| {
			log::info!("{}: {}", response.identifier(), describe(&response));
			handled.set(handled.get() + 1);
		});
	}

	let mut summary = ReplaySummary::default();
	for (index, line) in input.lines().enumerate() {
		let line_number = index + 1;
		let line = line.with_context(|| format!("Failed to read line {line_number}"))?;
		if line.trim().is_empty() {
			continue;
		}

		let recorded: RecordedResponse = match serde_json::from_str(&line) {
			Ok(recorded) => recorded,
			Err(error) => {
				log::warn!("Skipping line {line_number}, it is not a recorded response: {error}");
				summary.skipped += 1;
				continue;
			}
		};

		summary.read += 1;
		handler.handle_response(&recorded.identifier, &recorded.data);
	}

	summary.handled = handled.get();
	summary.dropped = summary.read - summary.handled;

	Ok(summary)
}

fn describe(response: &Response) -> String {
	match response {
		Response::SetActiveTool(set_active_tool) => format!("tool \"{}\"", set_active_tool.tool_name),
		Response::UpdateCanvas(update_canvas) => format!("{} bytes of canvas", update_canvas.document.len()),
		Response::DocumentChanged(_) => "document changed".to_string(),
		Response::CollapseFolder(collapse_folder) => format!("folder {:?}", collapse_folder.path),
		Response::ExpandFolder(expand_folder) => {
			let children = expand_folder.children.iter().map(|child| format!("{} ({})", child.name, child.layer_type)).collect::<Vec<_>>();
			format!("folder {:?} with {} children [{}]", expand_folder.path, children.len(), children.join(", "))
		}
	}
}
