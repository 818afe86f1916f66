use askama::Template;

use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub user_count: usize,
    pub role_count: usize,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegistrationTemplate {
    pub ctx: PageContext,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub job_roles: Vec<SelectOption>,
    pub errors: Vec<String>,
    pub completed: bool,
}
