use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
	#[error("API Error, status: `{status}`")]
	ApiError { status: String },
	#[error("API response was `ok` but carried no data")]
	MissingData,
}
