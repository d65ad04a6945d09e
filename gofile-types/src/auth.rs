use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The access token of an account, as shown on the profile page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct APIKey(pub String);

impl APIKey {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for APIKey {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for APIKey {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl Display for APIKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
