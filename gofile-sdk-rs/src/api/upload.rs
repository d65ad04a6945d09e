pub use gofile_types::api::upload::{ENDPOINT, Response};
use gofile_types::api::response::GofileResponse;
use log::debug;
use reqwest::multipart::Form;

use crate::{auth::http::UnauthorizedClient, consts::server_url, error::Error};

pub(crate) async fn post(
	client: impl UnauthorizedClient,
	server: &str,
	form: Form,
) -> Result<Response, Error> {
	debug!("Uploading to server {server}");
	let envelope = client
		.post_request(server_url(server, ENDPOINT))
		.multipart(form)
		.send()
		.await?
		.json::<GofileResponse<Response>>()
		.await?;
	Ok(envelope.into_data()?)
}
