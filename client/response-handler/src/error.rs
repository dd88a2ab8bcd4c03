use crate::response_type::ResponseType;

use thiserror::Error;

/// The error type used while parsing and dispatching responses.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResponseError {
	#[error("Unrecognized origin/responseType pair: {origin}, {response_type}")]
	UnrecognizedVariant { origin: String, response_type: String },

	#[error("Could not convert {value} in field \"{field}\" to an unsigned 64-bit integer")]
	Conversion { field: String, value: String },

	#[error("Received invalid input as an enum variant for {enum_name}: {value}")]
	InvalidEnumValue { enum_name: &'static str, value: String },

	#[error("The response data is missing the field \"{field}\"")]
	MissingField { field: String },

	#[error("The field \"{field}\" should be {expected}")]
	InvalidFieldType { field: String, expected: &'static str },

	#[error("No handler was registered for responses of type \"{0}\"")]
	NoHandlerRegistered(ResponseType),

	#[error("The handler for \"{response_type}\" panicked:\n{message}")]
	HandlerPanicked { response_type: ResponseType, message: String },

	#[error("The response handler has not been attached to the page")]
	NotAttached,

	#[error("The response handler is already in use by a running handler")]
	HandlerBusy,
}
