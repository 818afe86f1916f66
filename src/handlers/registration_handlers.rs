use actix_web::{web, HttpResponse};

use crate::console::ConsoleState;
use crate::console::registration::{RegistrationOutcome, complete_registration};
use crate::errors::{AppError, render};
use crate::models::registration::RegistrationForm;
use crate::templates_structs::{PageContext, RegistrationTemplate, role_options};

/// GET /register/{user_id}
pub async fn form(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let tmpl = RegistrationTemplate {
        ctx: PageContext::new("/register"),
        user_id,
        name: String::new(),
        email: String::new(),
        job_roles: role_options(None),
        errors: vec![],
        completed: false,
    };
    render(tmpl)
}

/// POST /register/{user_id}
pub async fn submit(
    state: web::Data<ConsoleState>,
    path: web::Path<String>,
    form: web::Form<RegistrationForm>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let form = form.into_inner();

    let tmpl = match complete_registration(state.gateway.as_ref(), &user_id, &form).await {
        RegistrationOutcome::Completed => RegistrationTemplate {
            ctx: PageContext::new("/register"),
            user_id,
            name: String::new(),
            email: String::new(),
            job_roles: role_options(None),
            errors: vec![],
            completed: true,
        },
        RegistrationOutcome::Rejected(errors) => RegistrationTemplate {
            ctx: PageContext::new("/register"),
            user_id,
            job_roles: role_options(form.job_role.parse().ok()),
            name: form.name,
            email: form.email,
            errors,
            completed: false,
        },
    };
    render(tmpl)
}
