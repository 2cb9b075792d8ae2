pub mod admin;
pub mod fallback;

pub use admin::{AdminService, AdminSettings};
