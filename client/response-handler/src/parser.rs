use crate::error::ResponseError;
use crate::response::*;
use crate::response_type::{Origin, ResponseType};

use serde_json::Value;

/// 2^64, the first float that no longer fits in a `u64`.
const LAYER_ID_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Parses the raw response data sent along with an `"<origin>::<response_type>"` identifier into a typed [`Response`].
///
/// The fields of the response are expected at `data[origin][response_type]`.
/// Only the pairs listed by [`ResponseType::origin`] are accepted, a response type sent under another origin is unrecognized.
pub fn parse_response(origin: &str, response_type: &str, data: &Value) -> Result<Response, ResponseError> {
	let unrecognized = || ResponseError::UnrecognizedVariant {
		origin: origin.to_string(),
		response_type: response_type.to_string(),
	};

	let parsed_origin = Origin::from_name(origin).ok_or_else(unrecognized)?;
	let parsed_response_type = ResponseType::from_name(response_type)
		.filter(|candidate| candidate.origin() == parsed_origin)
		.ok_or_else(unrecognized)?;

	let payload = data.get(origin).and_then(|origin_data| origin_data.get(response_type));
	let input = || payload.ok_or_else(|| ResponseError::MissingField { field: format!("{origin}.{response_type}") });

	let response: Response = match parsed_response_type {
		ResponseType::SetActiveTool => new_set_active_tool(input()?)?.into(),
		ResponseType::UpdateCanvas => new_update_canvas(input()?)?.into(),
		ResponseType::DocumentChanged => DocumentChanged.into(),
		ResponseType::CollapseFolder => new_collapse_folder(input()?)?.into(),
		ResponseType::ExpandFolder => new_expand_folder(input()?)?.into(),
	};

	Ok(response)
}

fn new_set_active_tool(input: &Value) -> Result<SetActiveTool, ResponseError> {
	Ok(SetActiveTool {
		tool_name: string_field(input, "tool_name")?,
	})
}

fn new_update_canvas(input: &Value) -> Result<UpdateCanvas, ResponseError> {
	Ok(UpdateCanvas {
		document: string_field(input, "document")?,
	})
}

fn new_collapse_folder(input: &Value) -> Result<CollapseFolder, ResponseError> {
	Ok(CollapseFolder { path: path_field(input, "path")? })
}

fn new_expand_folder(input: &Value) -> Result<ExpandFolder, ResponseError> {
	let children = array_field(input, "children")?.iter().map(new_layer_panel_entry).collect::<Result<Vec<_>, _>>()?;

	Ok(ExpandFolder {
		path: path_field(input, "path")?,
		children,
	})
}

fn new_layer_panel_entry(input: &Value) -> Result<LayerPanelEntry, ResponseError> {
	Ok(LayerPanelEntry {
		name: string_field(input, "name")?,
		visible: bool_field(input, "visible")?,
		layer_type: string_field(input, "layer_type")?.parse()?,
		collapsed: bool_field(input, "collapsed")?,
		path: path_field(input, "path")?,
	})
}

fn field<'a>(input: &'a Value, name: &str) -> Result<&'a Value, ResponseError> {
	input.get(name).ok_or_else(|| ResponseError::MissingField { field: name.to_string() })
}

fn invalid_type(name: &str, expected: &'static str) -> ResponseError {
	ResponseError::InvalidFieldType { field: name.to_string(), expected }
}

fn string_field(input: &Value, name: &str) -> Result<String, ResponseError> {
	field(input, name)?.as_str().map(str::to_string).ok_or_else(|| invalid_type(name, "a string"))
}

fn bool_field(input: &Value, name: &str) -> Result<bool, ResponseError> {
	field(input, name)?.as_bool().ok_or_else(|| invalid_type(name, "a boolean"))
}

fn array_field<'a>(input: &'a Value, name: &str) -> Result<&'a Vec<Value>, ResponseError> {
	field(input, name)?.as_array().ok_or_else(|| invalid_type(name, "an array"))
}

fn path_field(input: &Value, name: &str) -> Result<Vec<LayerId>, ResponseError> {
	array_field(input, name)?.iter().map(|element| layer_id(element, name)).collect()
}

/// Converts one element of a layer path without narrowing. Integral floats are accepted since JavaScript sends every number as one.
fn layer_id(value: &Value, name: &str) -> Result<LayerId, ResponseError> {
	let conversion_error = || ResponseError::Conversion {
		field: name.to_string(),
		value: value.to_string(),
	};

	let Value::Number(number) = value else { return Err(conversion_error()) };
	if let Some(id) = number.as_u64() {
		return Ok(id);
	}

	match number.as_f64() {
		Some(float) if float.fract() == 0. && float >= 0. && float < LAYER_ID_LIMIT => Ok(float as LayerId),
		_ => Err(conversion_error()),
	}
}
