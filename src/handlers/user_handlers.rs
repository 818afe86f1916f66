pub mod create;
pub mod delete;
pub mod edit;
pub mod list;

pub use self::create::{cancel_form, new_form, submit};
pub use self::delete::{cancel_delete, confirm_delete, request_delete};
pub use self::edit::{save, toggle};
pub use self::list::{list, refresh, ListQuery};
