pub mod account;
pub mod contents;
pub mod folder;
pub mod response;
pub mod server;
pub mod upload;
