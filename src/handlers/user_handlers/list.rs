use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::console::ConsoleState;
use crate::errors::{AppError, redirect, render};
use crate::handlers::parse_role_filter;
use crate::templates_structs::{PageContext, UserListTemplate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    search: Option<String>,
    role: Option<String>,
}

/// GET /users: applies any search/role query, then renders the derived views.
pub async fn list(
    state: web::Data<ConsoleState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let role = query.role.as_deref().map(parse_role_filter).transpose()?;

    let mut users = state.users.lock().await;
    if let Some(term) = &query.search {
        users.search(term);
    }
    if let Some(role) = role {
        users.filter_by_role(role);
    }
    users.tick(Utc::now());

    let ctx = PageContext::new("/users")
        .with_error(users.error())
        .with_success(users.success_message());
    render(UserListTemplate::build(ctx, &users))
}

/// POST /users/refresh
pub async fn refresh(state: web::Data<ConsoleState>) -> HttpResponse {
    state.refresh_users().await;
    redirect("/users")
}
