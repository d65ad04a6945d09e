use std::path::Path;

use gofile_types::{
	api::{account, folder, upload},
	auth::APIKey,
};
use log::debug;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use crate::{
	api,
	auth::http::{AuthClient, UnauthClient},
	error::Error,
	upload::UploadOptions,
};

/// Client for the GoFile API.
///
/// With an API key the account it belongs to is used; without one, GoFile
/// creates a guest account to receive uploads. The key is held for the
/// client's whole lifetime and no per-call state is stored, so one client
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Gofile {
	client: UnauthClient,
	api_key: Option<APIKey>,
}

impl Gofile {
	pub fn new(api_key: APIKey) -> Self {
		Self {
			client: UnauthClient::new(),
			api_key: Some(api_key),
		}
	}

	pub fn guest() -> Self {
		Self {
			client: UnauthClient::new(),
			api_key: None,
		}
	}

	/// Builds on an existing `reqwest::Client`, e.g. one with custom
	/// timeouts or proxy settings.
	pub fn from_client(client: reqwest::Client, api_key: Option<APIKey>) -> Self {
		Self {
			client: UnauthClient::from_client(client),
			api_key,
		}
	}

	pub fn api_key(&self) -> Option<&APIKey> {
		self.api_key.as_ref()
	}

	fn authed(&self) -> Result<AuthClient<'_>, Error> {
		match &self.api_key {
			Some(api_key) => Ok(AuthClient::new(&self.client, api_key)),
			None => Err(Error::NotAuthenticated),
		}
	}

	/// Resolves the server assigned to receive the next upload.
	///
	/// Resolved fresh on every upload call, never cached.
	pub async fn get_server(&self) -> Result<String, Error> {
		Ok(api::server::get(&self.client).await?.server)
	}

	/// Uploads one file to a freshly resolved server.
	///
	/// To upload multiple files into the same folder, call again with
	/// `options.folder_id` set to the first upload's `parent_folder`.
	pub async fn upload(
		&self,
		path: impl AsRef<Path>,
		options: &UploadOptions,
	) -> Result<upload::Response, Error> {
		let path = path.as_ref();
		let file_len = match tokio::fs::metadata(path).await {
			Ok(metadata) if metadata.is_file() => metadata.len(),
			Ok(_) => return Err(Error::InvalidFile(path.to_path_buf())),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				return Err(Error::InvalidFile(path.to_path_buf()));
			}
			Err(e) => return Err(Error::Io(e)),
		};
		options.validate()?;

		let server = self.get_server().await?;
		debug!("Uploading {} to server {server}", path.display());

		let mut form = Form::new();
		for (name, value) in options.form_fields() {
			form = form.text(name, value);
		}
		if let Some(api_key) = &self.api_key {
			form = form.text("token", api_key.0.clone());
		}

		let file = tokio::fs::File::open(path).await?;
		let file_name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();
		let part = Part::stream_with_length(
			reqwest::Body::wrap_stream(ReaderStream::new(file)),
			file_len,
		)
		.file_name(file_name);
		form = form.part("file", part);

		api::upload::post(&self.client, &server, form).await
	}

	/// Fetches the account's details; `all_details` switches between the
	/// minimal and the full field set.
	pub async fn get_account_details(&self, all_details: bool) -> Result<account::Response, Error> {
		api::account::get(self.authed()?, all_details).await
	}

	/// Deletes a file or folder by its content id.
	pub async fn delete_content(&self, content_id: impl Into<String>) -> Result<(), Error> {
		api::contents::delete(self.authed()?, content_id.into()).await
	}

	/// Sets one option on a folder.
	pub async fn set_folder_options(
		&self,
		folder_id: impl Into<String>,
		option: &folder::options::FolderOption,
	) -> Result<(), Error> {
		api::folder::options::put(self.authed()?, folder_id.into(), option).await
	}

	/// Creates a folder and returns its metadata.
	pub async fn create_folder(
		&self,
		parent_folder_id: impl Into<String>,
		folder_name: impl Into<String>,
	) -> Result<folder::create::Response, Error> {
		api::folder::create::put(self.authed()?, parent_folder_id.into(), folder_name.into()).await
	}
}
