//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie reading and `Set-Cookie` construction
//! - Login redirects carrying a return path
//! - Upstream HTTP client setup and error body parsing

pub mod cookie;
pub mod redirect;
pub mod upstream;
