//! Business services for the admin tool.

pub mod assets;
pub mod auth;
