use serde::{Deserialize, Serialize};

use crate::auth::APIKey;

pub const ENDPOINT: &str = "deleteContent";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub content_id: String,
	pub token: APIKey,
}
