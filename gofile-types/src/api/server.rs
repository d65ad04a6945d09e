use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "getServer";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Response {
	pub server: String,
}
