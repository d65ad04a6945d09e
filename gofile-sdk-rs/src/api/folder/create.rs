pub use gofile_types::api::folder::create::{ENDPOINT, Request, Response};
use gofile_types::api::response::GofileResponse;
use log::debug;

use crate::{auth::http::AuthorizedClient, consts::api_url, error::Error};

pub(crate) async fn put(
	client: impl AuthorizedClient,
	parent_folder_id: String,
	folder_name: String,
) -> Result<Response, Error> {
	debug!("Creating folder `{folder_name}` under {parent_folder_id}");
	let request = Request {
		token: client.get_api_key().clone(),
		folder_name,
		parent_folder_id,
	};
	let envelope = client
		.put_request(api_url(ENDPOINT))
		.form(&request)
		.send()
		.await?
		.json::<GofileResponse<Response>>()
		.await?;
	Ok(envelope.into_data()?)
}
