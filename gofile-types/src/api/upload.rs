use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "uploadFile";

/// Metadata of the uploaded file. Fields the server sends beyond the
/// documented set are kept in `extra` so the response round-trips whole.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Response {
	pub download_page: String,
	pub code: String,
	pub parent_folder: String,
	pub file_id: String,
	pub file_name: String,
	pub md5: String,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_fields_are_preserved() {
		let response: Response = serde_json::from_str(
			r#"{
				"downloadPage": "https://gofile.io/d/abc",
				"code": "abc",
				"parentFolder": "f-1",
				"fileId": "id-1",
				"fileName": "a.txt",
				"md5": "d41d8cd98f00b204e9800998ecf8427e",
				"guestToken": "g-1"
			}"#,
		)
		.unwrap();
		assert_eq!(response.code, "abc");
		assert_eq!(
			response.extra.get("guestToken"),
			Some(&serde_json::json!("g-1"))
		);
	}
}
