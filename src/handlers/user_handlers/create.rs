use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::console::ConsoleState;
use crate::errors::redirect;
use crate::models::user::DraftField;

/// Form data from the add-user popup.
#[derive(Debug, Deserialize)]
pub struct DraftForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// POST /users/new
pub async fn new_form(state: web::Data<ConsoleState>) -> HttpResponse {
    state.users.lock().await.open_add_form();
    redirect("/users")
}

/// POST /users/new/cancel: closes the popup and drops the draft.
pub async fn cancel_form(state: web::Data<ConsoleState>) -> HttpResponse {
    state.users.lock().await.close_add_form();
    redirect("/users")
}

/// POST /users: copy the submitted fields into the draft, then submit it.
/// On failure the popup stays open with the draft intact.
pub async fn submit(state: web::Data<ConsoleState>, form: web::Form<DraftForm>) -> HttpResponse {
    {
        let mut users = state.users.lock().await;
        users.open_add_form();
        users.update_draft(DraftField::Name, &form.name);
        users.update_draft(DraftField::Email, &form.email);
        users.update_draft(DraftField::Role, &form.role);
    }
    state.submit_new_user().await;
    redirect("/users")
}
