use gofile_types::auth::APIKey;
use reqwest::IntoUrl;

#[derive(Debug, Default, Clone)]
pub struct UnauthClient {
	client: reqwest::Client,
}

impl UnauthClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl UnauthorizedClient for &UnauthClient {
	fn get_client(&self) -> &reqwest::Client {
		&self.client
	}
}

/// Borrowed view of an [`UnauthClient`] plus a held API key.
///
/// Only constructed after the credential check, so an endpoint taking
/// `impl AuthorizedClient` cannot be reached without a token.
#[derive(Debug, Clone, Copy)]
pub struct AuthClient<'a> {
	client: &'a UnauthClient,
	api_key: &'a APIKey,
}

impl<'a> AuthClient<'a> {
	pub fn new(client: &'a UnauthClient, api_key: &'a APIKey) -> Self {
		Self { client, api_key }
	}
}

impl UnauthorizedClient for AuthClient<'_> {
	fn get_client(&self) -> &reqwest::Client {
		&self.client.client
	}
}

impl AuthorizedClient for AuthClient<'_> {
	fn get_api_key(&self) -> &APIKey {
		self.api_key
	}
}

pub trait UnauthorizedClient {
	fn get_client(&self) -> &reqwest::Client;

	fn get_request(&self, url: impl IntoUrl) -> reqwest::RequestBuilder {
		self.get_client().get(url)
	}

	fn post_request(&self, url: impl IntoUrl) -> reqwest::RequestBuilder {
		self.get_client().post(url)
	}

	fn put_request(&self, url: impl IntoUrl) -> reqwest::RequestBuilder {
		self.get_client().put(url)
	}

	fn delete_request(&self, url: impl IntoUrl) -> reqwest::RequestBuilder {
		self.get_client().delete(url)
	}
}

/// GoFile sends the token inside query strings and form payloads rather
/// than an Authorization header, so the trait exposes the key instead of
/// decorating the request builder.
pub trait AuthorizedClient: UnauthorizedClient {
	fn get_api_key(&self) -> &APIKey;
}
