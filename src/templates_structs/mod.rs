// Template context structures for Askama templates, organized by page.

use crate::models::role::{AccessLevel, Role};

pub const APP_NAME: &str = "Recruiter Console";

/// Common context shared by all console pages.
/// Templates access these as `ctx.app_name`, `ctx.error`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl PageContext {
    pub fn new(current_path: &str) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            current_path: current_path.to_string(),
            error: None,
            success: None,
        }
    }

    pub fn with_error(mut self, error: Option<&str>) -> Self {
        self.error = error.map(str::to_string);
        self
    }

    pub fn with_success(mut self, success: Option<&str>) -> Self {
        self.success = success.map(str::to_string);
        self
    }
}

/// One `<option>` in a select box.
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

pub fn role_options(selected: Option<Role>) -> Vec<SelectOption> {
    Role::ALL
        .iter()
        .map(|r| SelectOption { value: r.as_str(), selected: selected == Some(*r) })
        .collect()
}

pub fn access_options(selected: Option<AccessLevel>) -> Vec<SelectOption> {
    AccessLevel::ALL
        .iter()
        .map(|l| SelectOption { value: l.as_str(), selected: selected == Some(*l) })
        .collect()
}

mod common;
mod role;
mod user;

pub use common::*;
pub use role::*;
pub use user::*;
