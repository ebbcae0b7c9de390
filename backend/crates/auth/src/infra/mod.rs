//! Infrastructure Layer
//!
//! HTTP implementation of the blog API traits.

pub mod http;

pub use http::HttpAuthApi;
