#[macro_use]
mod macros;

pub mod dispatcher;
pub mod error;
pub mod parser;
pub mod registry;
pub mod response;
pub mod response_type;

#[doc(inline)]
pub use dispatcher::ResponseHandler;
#[doc(inline)]
pub use error::ResponseError;
#[doc(inline)]
pub use registry::{Callback, HandlerRegistry};
#[doc(inline)]
pub use response::{CollapseFolder, DocumentChanged, ExpandFolder, LayerId, LayerPanelEntry, LayerType, Response, SetActiveTool, UpdateCanvas};
#[doc(inline)]
pub use response_type::{Origin, ResponseType};

use serde_json::Value;
use std::cell::RefCell;

// The thread_local macro provides a way to initialize static variables with non-constant functions
thread_local! {
	static RESPONSE_HANDLER: RefCell<Option<ResponseHandler>> = const { RefCell::new(None) };
}

/// Sets up an empty response handler for this page. Must be called before any handler is registered or response handled.
pub fn attach_response_handler_to_page() {
	RESPONSE_HANDLER.with(|state| match state.try_borrow_mut() {
		Ok(mut state) => *state = Some(ResponseHandler::new()),
		Err(_) => log::error!("Tried to attach the response handler to the page from inside a response handler"),
	});
}

pub fn register_response_handler(response_type: ResponseType, callback: impl Fn(Response) + 'static) -> Result<(), ResponseError> {
	RESPONSE_HANDLER.with(|state| {
		let mut state = state.try_borrow_mut().map_err(|_| ResponseError::HandlerBusy)?;
		let handler = state.as_mut().ok_or(ResponseError::NotAttached)?;
		handler.register_response_handler(response_type, callback);

		Ok(())
	})
}

/// Entry point for the editor backend. Never fails, responses that cannot be delivered are logged and dropped.
pub fn handle_response(identifier: &str, data: &Value) {
	RESPONSE_HANDLER.with(|state| match state.try_borrow().as_deref() {
		Ok(Some(handler)) => handler.handle_response(identifier, data),
		Ok(None) => dispatcher::report_dropped_response(identifier, &ResponseError::NotAttached),
		Err(_) => dispatcher::report_dropped_response(identifier, &ResponseError::HandlerBusy),
	});
}
