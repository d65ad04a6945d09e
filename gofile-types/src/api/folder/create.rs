use serde::{Deserialize, Serialize};

use crate::auth::APIKey;

pub const ENDPOINT: &str = "createFolder";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub token: APIKey,
	pub folder_name: String,
	pub parent_folder_id: String,
}

/// The created folder's metadata (id, code, createTime, ...).
pub type Response = serde_json::Map<String, serde_json::Value>;
