pub mod create;
pub mod options;
