use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::console::ConsoleState;
use crate::errors::{AppError, redirect};
use crate::models::role::{AccessLevel, Role};
use crate::models::user::UserId;

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub access_level: String,
}

/// POST /users/{id}/edit: open or close the inline role editor.
pub async fn toggle(state: web::Data<ConsoleState>, path: web::Path<String>) -> HttpResponse {
    let id = UserId::new(path.into_inner());
    state.users.lock().await.toggle_edit(&id);
    redirect("/users")
}

/// POST /users/{id}/save: apply the submitted selections as scratch, then save.
/// An empty select keeps the scratch value seeded when editing began. A post
/// for a user other than the one being edited changes nothing.
pub async fn save(
    state: web::Data<ConsoleState>,
    path: web::Path<String>,
    form: web::Form<SaveForm>,
) -> Result<HttpResponse, AppError> {
    let id = UserId::new(path.into_inner());
    let role = (!form.role.is_empty()).then(|| form.role.parse::<Role>()).transpose()?;
    let level = (!form.access_level.is_empty())
        .then(|| form.access_level.parse::<AccessLevel>())
        .transpose()?;

    {
        let mut users = state.users.lock().await;
        if users.editing() == Some(&id) {
            if let Some(role) = role {
                users.change_scratch_role(role);
            }
            if let Some(level) = level {
                users.change_scratch_permission(level);
            }
        }
    }
    state.save_user_edit(&id).await;
    Ok(redirect("/users"))
}
