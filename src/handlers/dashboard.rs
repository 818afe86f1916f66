use actix_web::{web, HttpResponse};

use crate::console::ConsoleState;
use crate::errors::{AppError, render};
use crate::templates_structs::{DashboardTemplate, PageContext};

pub async fn index(state: web::Data<ConsoleState>) -> Result<HttpResponse, AppError> {
    let user_count = state.users.lock().await.users().len();
    let role_count = state.roles.lock().await.entries().len();

    let tmpl = DashboardTemplate {
        ctx: PageContext::new("/dashboard"),
        user_count,
        role_count,
    };
    render(tmpl)
}
