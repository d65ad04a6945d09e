use serde::{Deserialize, Serialize};

use crate::auth::APIKey;

pub const ENDPOINT: &str = "setFolderOptions";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub token: APIKey,
	pub folder_id: String,
	pub option: String,
	pub value: String,
}

/// A single option/value pair for `setFolderOptions`.
///
/// Only one option can be set per call. Tag lists are sent as a
/// comma-separated string with embedded spaces stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOption {
	Private(bool),
	Password(String),
	Description(String),
	/// Expiration date, passed through verbatim.
	Expire(String),
	Tags(String),
}

impl FolderOption {
	pub fn name(&self) -> &'static str {
		match self {
			FolderOption::Private(_) => "private",
			FolderOption::Password(_) => "password",
			FolderOption::Description(_) => "description",
			FolderOption::Expire(_) => "expire",
			FolderOption::Tags(_) => "tags",
		}
	}

	pub fn value(&self) -> String {
		match self {
			FolderOption::Private(value) => value.to_string(),
			FolderOption::Password(value)
			| FolderOption::Description(value)
			| FolderOption::Expire(value) => value.clone(),
			FolderOption::Tags(value) => value.replace(' ', ""),
		}
	}
}
