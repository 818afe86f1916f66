//! Recruiter console: user directory and role catalog management in front
//! of a remote REST API.

pub mod config;
pub mod console;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod validate;
