use crate::error::ResponseError;
use crate::response_type::{Origin, ResponseType};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub type LayerId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetActiveTool {
	pub tool_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCanvas {
	/// Serialized canvas description, passed through untouched.
	pub document: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChanged;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseFolder {
	pub path: Vec<LayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandFolder {
	pub path: Vec<LayerId>,
	pub children: Vec<LayerPanelEntry>,
}

/// One row of the layer panel, describing a node in the document's layer tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPanelEntry {
	pub name: String,
	pub visible: bool,
	pub layer_type: LayerType,
	pub collapsed: bool,
	pub path: Vec<LayerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerType {
	Folder,
	Shape,
	Circle,
	Rect,
	Line,
	PolyLine,
	Ellipse,
}

impl fmt::Display for LayerType {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		use LayerType::*;

		let name = match_variant_name!(match (self) {
			Folder,
			Shape,
			Circle,
			Rect,
			Line,
			PolyLine,
			Ellipse,
		});

		formatter.write_str(name)
	}
}

impl FromStr for LayerType {
	type Err = ResponseError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		use LayerType::*;

		match_string_to_enum!(match (name) {
			Folder,
			Shape,
			Circle,
			Rect,
			Line,
			PolyLine,
			Ellipse,
		})
		.ok_or_else(|| ResponseError::InvalidEnumValue {
			enum_name: "LayerType",
			value: name.to_string(),
		})
	}
}

/// A fully parsed response, ready to be handed to the handler registered for its [`ResponseType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
	SetActiveTool(SetActiveTool),
	UpdateCanvas(UpdateCanvas),
	DocumentChanged(DocumentChanged),
	CollapseFolder(CollapseFolder),
	ExpandFolder(ExpandFolder),
}

impl Response {
	pub fn response_type(&self) -> ResponseType {
		match self {
			Response::SetActiveTool(_) => ResponseType::SetActiveTool,
			Response::UpdateCanvas(_) => ResponseType::UpdateCanvas,
			Response::DocumentChanged(_) => ResponseType::DocumentChanged,
			Response::CollapseFolder(_) => ResponseType::CollapseFolder,
			Response::ExpandFolder(_) => ResponseType::ExpandFolder,
		}
	}

	pub fn origin(&self) -> Origin {
		self.response_type().origin()
	}

	pub fn identifier(&self) -> String {
		self.response_type().identifier()
	}

	/// Serializes the response into the shape the backend sends it in, with the fields nested under the origin and response type names:
	/// `{ "<Origin>": { "<ResponseType>": { ...fields } } }`
	pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
		let fields = match self {
			Response::SetActiveTool(response) => serde_json::to_value(response)?,
			Response::UpdateCanvas(response) => serde_json::to_value(response)?,
			Response::DocumentChanged(response) => serde_json::to_value(response)?,
			Response::CollapseFolder(response) => serde_json::to_value(response)?,
			Response::ExpandFolder(response) => serde_json::to_value(response)?,
		};

		let mut response_type = Map::new();
		response_type.insert(self.response_type().name().to_string(), fields);
		let mut origin = Map::new();
		origin.insert(self.origin().name().to_string(), Value::Object(response_type));

		Ok(Value::Object(origin))
	}
}

impl fmt::Display for Response {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str(self.response_type().name())
	}
}

macro_rules! derive_from {
	($type:ident) => {
		impl From<$type> for Response {
			fn from(response: $type) -> Self {
				Response::$type(response)
			}
		}
	};
}

derive_from!(SetActiveTool);
derive_from!(UpdateCanvas);
derive_from!(DocumentChanged);
derive_from!(CollapseFolder);
derive_from!(ExpandFolder);
