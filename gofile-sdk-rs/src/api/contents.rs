pub use gofile_types::api::contents::{ENDPOINT, Request};
use gofile_types::api::response::GofileResponse;
use log::debug;

use crate::{auth::http::AuthorizedClient, consts::api_url, error::Error};

pub(crate) async fn delete(
	client: impl AuthorizedClient,
	content_id: String,
) -> Result<(), Error> {
	debug!("Deleting content {content_id}");
	let request = Request {
		content_id,
		token: client.get_api_key().clone(),
	};
	client
		.delete_request(api_url(ENDPOINT))
		.form(&request)
		.send()
		.await?
		.json::<GofileResponse<serde_json::Value>>()
		.await?
		.check_status()?;
	Ok(())
}
