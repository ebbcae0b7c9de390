//! Value Object Module

pub mod email;
pub mod password;
pub mod route_pattern;
pub mod token;
pub mod user_name;

pub use email::Email;
pub use password::Password;
pub use route_pattern::{RoutePattern, RouteScope};
pub use token::{AccessToken, RefreshToken};
pub use user_name::UserName;
