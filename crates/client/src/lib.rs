//! HTTP service wrappers for the crop insurance API.

pub mod api;
pub mod error_convert;
pub mod http;

pub use http::ApiClient;
