pub const GOFILE_DOMAIN: &str = "gofile.io";

/// Subdomain serving every endpoint except `uploadFile`.
pub const API_SERVER: &str = "api";

pub const MIN_PASSWORD_LEN: usize = 4;

pub fn server_url(server: &str, path: &str) -> String {
	format!("https://{server}.{GOFILE_DOMAIN}/{path}")
}

pub fn api_url(path: &str) -> String {
	server_url(API_SERVER, path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn urls() {
		assert_eq!(api_url("getServer"), "https://api.gofile.io/getServer");
		assert_eq!(
			server_url("store1", "uploadFile"),
			"https://store1.gofile.io/uploadFile"
		);
	}
}
