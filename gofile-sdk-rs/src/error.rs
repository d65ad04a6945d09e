use std::path::PathBuf;

use thiserror::Error;

use crate::consts::MIN_PASSWORD_LEN;

#[derive(Debug, Error)]
pub enum Error {
	#[error("Response Error: `{0}`")]
	Response(#[from] gofile_types::error::ResponseError),
	#[error("Request Error: `{0}`")]
	Request(#[from] reqwest::Error),
	#[error("IO Error: `{0}`")]
	Io(#[from] std::io::Error),
	#[error("this operation requires an API token")]
	NotAuthenticated,
	#[error("not an existing file: `{}`", .0.display())]
	InvalidFile(PathBuf),
	#[error("password is too short (min len {MIN_PASSWORD_LEN})")]
	PasswordTooShort,
}
