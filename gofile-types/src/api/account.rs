use serde::{Deserialize, Serialize};

use crate::auth::APIKey;

pub const ENDPOINT: &str = "getAccountDetails";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub token: APIKey,
	pub all_details: bool,
}

/// The field set depends on `allDetails`, so the details stay a raw map.
pub type Response = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_names_are_camel_case() {
		let request = Request {
			token: APIKey::from("tok"),
			all_details: true,
		};
		assert_eq!(
			serde_json::to_string(&request).unwrap(),
			r#"{"token":"tok","allDetails":true}"#
		);
	}
}
