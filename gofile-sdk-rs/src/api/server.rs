pub use gofile_types::api::server::{ENDPOINT, Response};
use gofile_types::api::response::GofileResponse;
use log::debug;

use crate::{auth::http::UnauthorizedClient, consts::api_url, error::Error};

pub(crate) async fn get(client: impl UnauthorizedClient) -> Result<Response, Error> {
	debug!("Resolving upload server");
	let envelope = client
		.get_request(api_url(ENDPOINT))
		.send()
		.await?
		.json::<GofileResponse<Response>>()
		.await?;
	Ok(envelope.into_data()?)
}
