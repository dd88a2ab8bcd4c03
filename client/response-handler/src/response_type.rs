use serde::{Deserialize, Serialize};
use std::fmt;

/// The editor subsystem that produced a response. Forms the first half of a response identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
	Document,
	Tool,
}

impl Origin {
	pub fn from_name(name: &str) -> Option<Self> {
		use Origin::*;

		match_string_to_enum!(match (name) { Document, Tool })
	}

	pub fn name(&self) -> &'static str {
		use Origin::*;

		match_variant_name!(match (self) { Document, Tool })
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str(self.name())
	}
}

/// The kind of a response within its origin. Handlers are registered per response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
	SetActiveTool,
	UpdateCanvas,
	DocumentChanged,
	CollapseFolder,
	ExpandFolder,
}

impl ResponseType {
	pub const ALL: [ResponseType; 5] = [
		ResponseType::SetActiveTool,
		ResponseType::UpdateCanvas,
		ResponseType::DocumentChanged,
		ResponseType::CollapseFolder,
		ResponseType::ExpandFolder,
	];

	pub fn from_name(name: &str) -> Option<Self> {
		use ResponseType::*;

		match_string_to_enum!(match (name) {
			SetActiveTool,
			UpdateCanvas,
			DocumentChanged,
			CollapseFolder,
			ExpandFolder,
		})
	}

	pub fn name(&self) -> &'static str {
		use ResponseType::*;

		match_variant_name!(match (self) {
			SetActiveTool,
			UpdateCanvas,
			DocumentChanged,
			CollapseFolder,
			ExpandFolder,
		})
	}

	/// The only origin allowed to send this response type.
	pub fn origin(&self) -> Origin {
		match self {
			ResponseType::SetActiveTool | ResponseType::UpdateCanvas => Origin::Tool,
			ResponseType::DocumentChanged | ResponseType::CollapseFolder | ResponseType::ExpandFolder => Origin::Document,
		}
	}

	/// The `"<Origin>::<ResponseType>"` identifier the backend sends alongside the payload.
	pub fn identifier(&self) -> String {
		format!("{}::{}", self.origin(), self)
	}
}

impl fmt::Display for ResponseType {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str(self.name())
	}
}
