use serde::Deserialize;

use crate::error::ResponseError;

pub const STATUS_OK: &str = "ok";

/// The `{status, data}` envelope every GoFile response uses.
///
/// `status == "ok"` means `data` carries the operation's result; any other
/// status is a per-call failure carrying the status string as diagnostic.
#[derive(Deserialize, Debug)]
#[serde(bound = "T: Deserialize<'de>")]
pub struct GofileResponse<T>
where
	T: std::fmt::Debug,
{
	pub status: String,
	data: Option<T>,
}

impl<T> GofileResponse<T>
where
	T: std::fmt::Debug,
{
	pub fn into_data(self) -> Result<T, ResponseError> {
		if self.status != STATUS_OK {
			return Err(ResponseError::ApiError {
				status: self.status,
			});
		}
		self.data.ok_or(ResponseError::MissingData)
	}

	/// For endpoints whose `data` payload is empty or unspecified.
	pub fn check_status(self) -> Result<(), ResponseError> {
		if self.status == STATUS_OK {
			Ok(())
		} else {
			Err(ResponseError::ApiError {
				status: self.status,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_envelope_yields_data() {
		let response: GofileResponse<serde_json::Value> =
			serde_json::from_str(r#"{"status": "ok", "data": {"x": 1}}"#).unwrap();
		assert_eq!(
			response.into_data().unwrap(),
			serde_json::json!({"x": 1})
		);
	}

	#[test]
	fn non_ok_status_carries_the_literal_status() {
		let response: GofileResponse<serde_json::Value> =
			serde_json::from_str(r#"{"status": "error-auth"}"#).unwrap();
		assert_eq!(
			response.into_data().unwrap_err(),
			ResponseError::ApiError {
				status: "error-auth".to_string()
			}
		);
	}

	#[test]
	fn ok_envelope_without_data_is_rejected() {
		let response: GofileResponse<serde_json::Value> =
			serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
		assert_eq!(response.into_data().unwrap_err(), ResponseError::MissingData);
	}

	#[test]
	fn check_status_ignores_data() {
		let response: GofileResponse<serde_json::Value> =
			serde_json::from_str(r#"{"status": "ok", "data": {}}"#).unwrap();
		response.check_status().unwrap();

		let response: GofileResponse<serde_json::Value> =
			serde_json::from_str(r#"{"status": "error-notFound", "data": null}"#).unwrap();
		assert_eq!(
			response.check_status().unwrap_err(),
			ResponseError::ApiError {
				status: "error-notFound".to_string()
			}
		);
	}
}
