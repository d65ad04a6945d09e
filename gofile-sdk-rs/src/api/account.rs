pub use gofile_types::api::account::{ENDPOINT, Request, Response};
use gofile_types::api::response::GofileResponse;
use log::debug;

use crate::{auth::http::AuthorizedClient, consts::api_url, error::Error};

pub(crate) async fn get(
	client: impl AuthorizedClient,
	all_details: bool,
) -> Result<Response, Error> {
	debug!("Fetching account details (all_details: {all_details})");
	let request = Request {
		token: client.get_api_key().clone(),
		all_details,
	};
	let envelope = client
		.get_request(api_url(ENDPOINT))
		.query(&request)
		.send()
		.await?
		.json::<GofileResponse<Response>>()
		.await?;
	Ok(envelope.into_data()?)
}
