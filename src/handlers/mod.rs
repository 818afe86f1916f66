pub mod dashboard;
pub mod registration_handlers;
pub mod role_handlers;
pub mod user_handlers;

use actix_web::web;

use crate::errors::{AppError, redirect};
use crate::models::role::Role;

/// Role filter from a query string: empty means "all roles".
pub fn parse_role_filter(value: &str) -> Result<Option<Role>, AppError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

/// Configure console routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(|| async { redirect("/dashboard") }))
        .route("/dashboard", web::get().to(dashboard::index))
        // Users: fixed paths BEFORE /users/{id}/...
        .route("/users", web::get().to(user_handlers::list))
        .route("/users", web::post().to(user_handlers::submit))
        .route("/users/refresh", web::post().to(user_handlers::refresh))
        .route("/users/new", web::post().to(user_handlers::new_form))
        .route("/users/new/cancel", web::post().to(user_handlers::cancel_form))
        .route("/users/delete/confirm", web::post().to(user_handlers::confirm_delete))
        .route("/users/delete/cancel", web::post().to(user_handlers::cancel_delete))
        .route("/users/{id}/edit", web::post().to(user_handlers::toggle))
        .route("/users/{id}/save", web::post().to(user_handlers::save))
        .route("/users/{id}/delete", web::post().to(user_handlers::request_delete))
        // Role catalog: /roles/add and /roles/persist BEFORE /roles/{index}
        .route("/roles", web::get().to(role_handlers::list))
        .route("/roles/add", web::post().to(role_handlers::add))
        .route("/roles/persist", web::post().to(role_handlers::persist))
        .route("/roles/{index:\\d+}", web::post().to(role_handlers::update))
        .route("/roles/{index:\\d+}/remove", web::post().to(role_handlers::remove))
        // Invitation
        .route("/register/{user_id}", web::get().to(registration_handlers::form))
        .route("/register/{user_id}", web::post().to(registration_handlers::submit));
}
