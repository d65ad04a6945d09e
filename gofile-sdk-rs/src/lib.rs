pub(crate) mod api;
pub mod auth;
pub mod client;
pub mod consts;
pub mod error;
pub mod upload;

pub use client::Gofile;
pub use error::Error;
pub use gofile_types as types;
pub use gofile_types::{api::folder::options::FolderOption, auth::APIKey};
pub use upload::UploadOptions;
