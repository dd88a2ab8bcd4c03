use crate::error::ResponseError;
use crate::parser::parse_response;
use crate::registry::HandlerRegistry;
use crate::response::Response;
use crate::response_type::ResponseType;

use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Turns raw `(identifier, data)` pairs from the editor backend into typed responses and hands each one to the handler registered for its type.
#[derive(Debug, Default)]
pub struct ResponseHandler {
	registry: HandlerRegistry,
}

impl ResponseHandler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a fresh page session, forgetting all previously registered handlers.
	pub fn attach(&mut self) {
		self.registry.reset();
	}

	pub fn register_response_handler(&mut self, response_type: ResponseType, callback: impl Fn(Response) + 'static) {
		self.registry.register(response_type, Box::new(callback));
	}

	pub fn registry(&self) -> &HandlerRegistry {
		&self.registry
	}

	/// Parses and delivers one response, returning its type if a handler received it.
	///
	/// A panic inside the handler is caught and returned as [`ResponseError::HandlerPanicked`] so later responses still get delivered.
	pub fn dispatch(&self, identifier: &str, data: &Value) -> Result<ResponseType, ResponseError> {
		let (origin, response_type) = split_identifier(identifier);

		let response = parse_response(origin, response_type, data)?;
		let response_type = response.response_type();
		let callback = self.registry.lookup(response_type).ok_or(ResponseError::NoHandlerRegistered(response_type))?;

		panic::catch_unwind(AssertUnwindSafe(|| callback(response))).map_err(|payload| ResponseError::HandlerPanicked {
			response_type,
			message: panic_message(payload.as_ref()),
		})?;

		Ok(response_type)
	}

	/// Delivers one response, logging instead of returning any reason it was dropped.
	pub fn handle_response(&self, identifier: &str, data: &Value) {
		match self.dispatch(identifier, data) {
			Ok(response_type) => log::trace!("Handled {} Response", response_type),
			Err(error) => report_dropped_response(identifier, &error),
		}
	}
}

/// Splits `"<origin>::<response_type>"`. Missing segments are empty and anything after the second segment is ignored.
pub fn split_identifier(identifier: &str) -> (&str, &str) {
	let mut segments = identifier.split("::");
	let origin = segments.next().unwrap_or_default();
	let response_type = segments.next().unwrap_or_default();

	(origin, response_type)
}

pub fn report_dropped_response(identifier: &str, error: &ResponseError) {
	match error {
		ResponseError::NoHandlerRegistered(_) => log::error!("Received a Response of type \"{}\" but no handler was registered for it from the client.", identifier),
		ResponseError::HandlerPanicked { message, .. } => log::error!("While handling Response \"{}\", the handler panicked: {}", identifier, message),
		_ => log::error!("Received a Response of type \"{}\" but was not able to parse the data: {}", identifier, error),
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		message.to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"Unknown panic payload".to_string()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::response::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;
	use std::cell::RefCell;
	use std::rc::Rc;

	fn init_logger() {
		let _ = env_logger::builder().is_test(true).try_init();
	}

	/// Creates a response handler that records every response it receives for the given types
	fn recording_handler(response_types: &[ResponseType]) -> (ResponseHandler, Rc<RefCell<Vec<Response>>>) {
		init_logger();

		let received = Rc::new(RefCell::new(Vec::new()));
		let mut handler = ResponseHandler::new();
		handler.attach();
		for &response_type in response_types {
			let received = received.clone();
			handler.register_response_handler(response_type, move |response| received.borrow_mut().push(response));
		}

		(handler, received)
	}

	#[test]
	fn set_active_tool_reaches_its_handler() {
		let (handler, received) = recording_handler(&[ResponseType::SetActiveTool]);

		handler.handle_response("Tool::SetActiveTool", &json!({ "Tool": { "SetActiveTool": { "tool_name": "pen" } } }));

		assert_eq!(*received.borrow(), vec![Response::SetActiveTool(SetActiveTool { tool_name: "pen".to_string() })]);
	}

	#[test]
	fn expand_folder_reaches_its_handler_with_children() {
		let (handler, received) = recording_handler(&[ResponseType::ExpandFolder]);
		let data = json!({ "Document": { "ExpandFolder": {
			"path": [0],
			"children": [{ "name": "Layer 1", "visible": true, "layer_type": "Rect", "collapsed": false, "path": [0, 0] }]
		} } });

		assert_eq!(handler.dispatch("Document::ExpandFolder", &data), Ok(ResponseType::ExpandFolder));

		let received = received.borrow();
		assert_eq!(received.len(), 1);
		let Response::ExpandFolder(expand_folder) = &received[0] else { panic!("Expected an ExpandFolder response") };
		assert_eq!(expand_folder.children.len(), 1);
		assert_eq!(expand_folder.children[0].layer_type, LayerType::Rect);
	}

	#[test]
	fn every_known_response_is_delivered_exactly_once() {
		let (handler, received) = recording_handler(&ResponseType::ALL);
		let responses: Vec<Response> = vec![
			SetActiveTool { tool_name: "Rectangle".to_string() }.into(),
			UpdateCanvas { document: "<svg></svg>".to_string() }.into(),
			DocumentChanged.into(),
			CollapseFolder { path: vec![4, 2] }.into(),
			ExpandFolder {
				path: vec![1],
				children: vec![LayerPanelEntry {
					name: "Folder 1".to_string(),
					visible: true,
					layer_type: LayerType::Folder,
					collapsed: true,
					path: vec![1, 0],
				}],
			}
			.into(),
		];

		for response in &responses {
			let data = response.to_payload().unwrap();
			assert_eq!(handler.dispatch(&response.identifier(), &data), Ok(response.response_type()));
		}

		assert_eq!(*received.borrow(), responses);
	}

	#[test]
	fn unhandled_response_is_dropped() {
		let (handler, received) = recording_handler(&[ResponseType::CollapseFolder]);
		let data = json!({ "Tool": { "UpdateCanvas": { "document": "" } } });

		assert_eq!(handler.dispatch("Tool::UpdateCanvas", &data), Err(ResponseError::NoHandlerRegistered(ResponseType::UpdateCanvas)));
		handler.handle_response("Tool::UpdateCanvas", &data);

		assert!(received.borrow().is_empty());
	}

	#[test]
	fn later_registration_replaces_earlier_one() {
		let (mut handler, received) = recording_handler(&[ResponseType::DocumentChanged]);
		let replacement = Rc::new(RefCell::new(0));
		let counter = replacement.clone();
		handler.register_response_handler(ResponseType::DocumentChanged, move |_| *counter.borrow_mut() += 1);

		handler.handle_response("Document::DocumentChanged", &json!({}));
		handler.handle_response("Document::DocumentChanged", &json!({}));

		assert!(received.borrow().is_empty());
		assert_eq!(*replacement.borrow(), 2);
	}

	#[test]
	fn unrecognized_pairs_invoke_nothing() {
		let (handler, received) = recording_handler(&ResponseType::ALL);
		let data = json!({ "Document": { "SetActiveTool": { "tool_name": "pen" } }, "Tool": { "ExpandFolder": { "path": [], "children": [] } } });

		for identifier in ["Document::SetActiveTool", "Tool::ExpandFolder", "Frontend::UpdateCanvas", "Tool::EnableTextInput"] {
			assert!(matches!(handler.dispatch(identifier, &data), Err(ResponseError::UnrecognizedVariant { .. })), "{identifier} was accepted");
		}

		assert!(received.borrow().is_empty());
	}

	#[test]
	fn malformed_identifiers_fall_through_to_parse_failure() {
		let (handler, received) = recording_handler(&ResponseType::ALL);

		for identifier in ["Tool", "", "::", "Tool::"] {
			assert!(matches!(handler.dispatch(identifier, &json!({})), Err(ResponseError::UnrecognizedVariant { .. })));
			handler.handle_response(identifier, &json!({}));
		}

		assert!(received.borrow().is_empty());
	}

	#[test]
	fn segments_after_response_type_are_ignored() {
		assert_eq!(split_identifier("Tool::SetActiveTool::extra"), ("Tool", "SetActiveTool"));
		assert_eq!(split_identifier("Tool"), ("Tool", ""));
		assert_eq!(split_identifier(""), ("", ""));
	}

	#[test]
	fn invalid_path_drops_the_whole_response() {
		let (handler, received) = recording_handler(&ResponseType::ALL);

		handler.handle_response("Document::CollapseFolder", &json!({ "Document": { "CollapseFolder": { "path": [0, -1] } } }));
		handler.handle_response("Document::CollapseFolder", &json!({ "Document": { "CollapseFolder": { "path": [0.5] } } }));

		assert!(received.borrow().is_empty());
	}

	#[test]
	fn panicking_handler_does_not_break_dispatch() {
		let (mut handler, received) = recording_handler(&[ResponseType::UpdateCanvas]);
		handler.register_response_handler(ResponseType::SetActiveTool, |_| panic!("tool panel is gone"));

		let result = handler.dispatch("Tool::SetActiveTool", &json!({ "Tool": { "SetActiveTool": { "tool_name": "Fill" } } }));
		assert_eq!(
			result,
			Err(ResponseError::HandlerPanicked {
				response_type: ResponseType::SetActiveTool,
				message: "tool panel is gone".to_string()
			})
		);

		handler.handle_response("Tool::UpdateCanvas", &json!({ "Tool": { "UpdateCanvas": { "document": "<svg/>" } } }));
		assert_eq!(*received.borrow(), vec![Response::UpdateCanvas(UpdateCanvas { document: "<svg/>".to_string() })]);
	}

	#[test]
	fn attach_forgets_previous_handlers() {
		let (mut handler, received) = recording_handler(&ResponseType::ALL);

		handler.attach();
		handler.handle_response("Document::DocumentChanged", &json!({}));

		assert!(handler.registry().is_empty());
		assert!(received.borrow().is_empty());
	}
}
