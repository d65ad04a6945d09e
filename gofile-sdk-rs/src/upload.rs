use chrono::{NaiveDate, NaiveTime};

use crate::{consts::MIN_PASSWORD_LEN, error::Error};

/// Options for a newly created upload folder.
///
/// All fields apply to the folder GoFile creates to receive the file. When
/// `folder_id` targets an existing folder instead, every other option is
/// ignored and the serialized form contains only `folderId`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadOptions {
	pub description: Option<String>,
	pub password: Option<String>,
	/// Comma-separated tag list, e.g. `"a,b"`. Embedded spaces are
	/// stripped on serialization.
	pub tags: Option<String>,
	/// Expiration date, converted to Unix seconds at UTC midnight.
	pub expire: Option<NaiveDate>,
	pub folder_id: Option<String>,
}

impl UploadOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(password.into());
		self
	}

	pub fn tags(mut self, tags: impl Into<String>) -> Self {
		self.tags = Some(tags.into());
		self
	}

	pub fn expire(mut self, expire: NaiveDate) -> Self {
		self.expire = Some(expire);
		self
	}

	pub fn folder_id(mut self, folder_id: impl Into<String>) -> Self {
		self.folder_id = Some(folder_id.into());
		self
	}

	pub(crate) fn validate(&self) -> Result<(), Error> {
		if let Some(password) = non_empty(&self.password) {
			if password.chars().count() < MIN_PASSWORD_LEN {
				return Err(Error::PasswordTooShort);
			}
		}
		Ok(())
	}

	/// Serializes into `uploadFile` multipart text fields.
	///
	/// A non-empty `folder_id` replaces everything else; the result is then
	/// exactly `[("folderId", ...)]`. Empty fields never appear as keys.
	pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
		if let Some(folder_id) = non_empty(&self.folder_id) {
			return vec![("folderId", folder_id.to_string())];
		}
		let mut fields = Vec::new();
		if let Some(description) = non_empty(&self.description) {
			fields.push(("description", description.to_string()));
		}
		if let Some(password) = non_empty(&self.password) {
			fields.push(("password", password.to_string()));
		}
		if let Some(tags) = non_empty(&self.tags) {
			fields.push(("tags", tags.replace(' ', "")));
		}
		if let Some(expire) = self.expire {
			let timestamp = expire.and_time(NaiveTime::MIN).and_utc().timestamp();
			fields.push(("expire", timestamp.to_string()));
		}
		fields
	}
}

fn non_empty(field: &Option<String>) -> Option<&str> {
	field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_options_serialize_to_nothing() {
		assert!(UploadOptions::new().form_fields().is_empty());
	}

	#[test]
	fn only_supplied_fields_appear() {
		let fields = UploadOptions::new()
			.description("hello")
			.password("abcd")
			.form_fields();
		assert_eq!(
			fields,
			vec![
				("description", "hello".to_string()),
				("password", "abcd".to_string()),
			]
		);
	}

	#[test]
	fn empty_strings_never_appear_as_keys() {
		let fields = UploadOptions::new()
			.description("")
			.tags("")
			.password("abcd")
			.form_fields();
		assert_eq!(fields, vec![("password", "abcd".to_string())]);
	}

	#[test]
	fn folder_id_replaces_all_other_fields() {
		let fields = UploadOptions::new()
			.description("hello")
			.password("abcd")
			.tags("a,b")
			.expire(NaiveDate::from_ymd_opt(2021, 12, 25).unwrap())
			.folder_id("f-1")
			.form_fields();
		assert_eq!(fields, vec![("folderId", "f-1".to_string())]);
	}

	#[test]
	fn empty_folder_id_does_not_override() {
		let fields = UploadOptions::new()
			.folder_id("")
			.description("hello")
			.form_fields();
		assert_eq!(fields, vec![("description", "hello".to_string())]);
	}

	#[test]
	fn tags_collapse_embedded_spaces() {
		let fields = UploadOptions::new().tags("a, b, c").form_fields();
		assert_eq!(fields, vec![("tags", "a,b,c".to_string())]);
	}

	#[test]
	fn expire_converts_to_utc_midnight_unix_seconds() {
		let fields = UploadOptions::new()
			.expire(NaiveDate::from_ymd_opt(2021, 12, 25).unwrap())
			.form_fields();
		assert_eq!(fields, vec![("expire", "1640390400".to_string())]);
	}

	#[test]
	fn short_password_is_rejected() {
		assert!(matches!(
			UploadOptions::new().password("abc").validate(),
			Err(Error::PasswordTooShort)
		));
		UploadOptions::new().password("abcd").validate().unwrap();
	}
}
