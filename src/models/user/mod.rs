pub mod filter;
pub mod types;

pub use filter::{DirectoryView, UserFilter};
pub use types::*;
