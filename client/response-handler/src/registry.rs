use crate::response::Response;
use crate::response_type::ResponseType;

use std::collections::HashMap;
use std::fmt;

pub type Callback = Box<dyn Fn(Response)>;

/// Holds at most one callback per [`ResponseType`]. Registering again for the same type replaces the previous callback.
#[derive(Default)]
pub struct HandlerRegistry {
	handlers: HashMap<ResponseType, Callback>,
}

impl HandlerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Drops every registered callback.
	pub fn reset(&mut self) {
		self.handlers.clear();
	}

	pub fn register(&mut self, response_type: ResponseType, callback: Callback) {
		if self.handlers.insert(response_type, callback).is_some() {
			log::trace!("Replaced the handler for {} responses", response_type);
		}
	}

	pub fn lookup(&self, response_type: ResponseType) -> Option<&Callback> {
		self.handlers.get(&response_type)
	}

	pub fn is_registered(&self, response_type: ResponseType) -> bool {
		self.handlers.contains_key(&response_type)
	}

	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}
}

impl fmt::Debug for HandlerRegistry {
	fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.debug_set().entries(self.handlers.keys()).finish()
	}
}
