use actix_web::{web, HttpResponse};

use crate::console::ConsoleState;
use crate::errors::redirect;
use crate::models::user::UserId;

/// POST /users/{id}/delete: only raises the confirmation prompt.
pub async fn request_delete(state: web::Data<ConsoleState>, path: web::Path<String>) -> HttpResponse {
    let id = UserId::new(path.into_inner());
    state.users.lock().await.request_delete(&id);
    redirect("/users")
}

/// POST /users/delete/confirm
pub async fn confirm_delete(state: web::Data<ConsoleState>) -> HttpResponse {
    state.confirm_user_delete().await;
    redirect("/users")
}

/// POST /users/delete/cancel
pub async fn cancel_delete(state: web::Data<ConsoleState>) -> HttpResponse {
    state.users.lock().await.cancel_delete();
    redirect("/users")
}
