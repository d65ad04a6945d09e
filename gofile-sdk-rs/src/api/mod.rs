pub(crate) mod account;
pub(crate) mod contents;
pub(crate) mod folder;
pub(crate) mod server;
pub(crate) mod upload;
