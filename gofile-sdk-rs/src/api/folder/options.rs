pub use gofile_types::api::folder::options::{ENDPOINT, FolderOption, Request};
use gofile_types::api::response::GofileResponse;
use log::debug;

use crate::{auth::http::AuthorizedClient, consts::api_url, error::Error};

pub(crate) async fn put(
	client: impl AuthorizedClient,
	folder_id: String,
	option: &FolderOption,
) -> Result<(), Error> {
	debug!("Setting option `{}` on folder {folder_id}", option.name());
	let request = Request {
		token: client.get_api_key().clone(),
		folder_id,
		option: option.name().to_string(),
		value: option.value(),
	};
	client
		.put_request(api_url(ENDPOINT))
		.form(&request)
		.send()
		.await?
		.json::<GofileResponse<serde_json::Value>>()
		.await?
		.check_status()?;
	Ok(())
}
