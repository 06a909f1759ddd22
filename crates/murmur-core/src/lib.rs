#![allow(clippy::must_use_candidate)]

mod error;
mod http_client;

pub use error::{HttpError, ServiceError, Stage};
pub use http_client::http_client;
