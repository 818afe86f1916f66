pub mod registration;
pub mod role;
pub mod user;
