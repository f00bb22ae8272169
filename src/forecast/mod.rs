pub mod client;
pub mod error;
pub(crate) mod response;
