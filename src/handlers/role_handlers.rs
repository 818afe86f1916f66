use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::console::{ConsoleState, RoleCatalog};
use crate::errors::{AppError, redirect, render};
use crate::models::role::{AccessLevel, Role, RoleCatalogEntry};
use crate::templates_structs::{PageContext, RoleCatalogTemplate};

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    pub role: String,
    pub access_level: String,
}

/// The catalog page posts every row as repeated `role` / `access_level`
/// pairs, in row order.
type RowsForm = Option<web::Form<Vec<(String, String)>>>;

/// Pair up the repeated fields. Extra or missing halves are a bad request.
pub fn parse_rows(fields: &[(String, String)]) -> Result<Vec<RoleCatalogEntry>, AppError> {
    let mut roles = Vec::new();
    let mut levels = Vec::new();
    for (key, value) in fields {
        match key.as_str() {
            "role" => roles.push(value.parse::<Role>()?),
            "access_level" => levels.push(value.parse::<AccessLevel>()?),
            _ => {}
        }
    }
    if roles.len() != levels.len() {
        return Err(AppError::BadRequest(format!(
            "{} roles submitted with {} access levels",
            roles.len(),
            levels.len()
        )));
    }
    Ok(roles
        .into_iter()
        .zip(levels)
        .map(|(role, access_level)| RoleCatalogEntry { role, access_level })
        .collect())
}

/// Copy the submitted selections onto the catalog before another action.
fn apply_submitted(catalog: &mut RoleCatalog, form: &RowsForm) -> Result<(), AppError> {
    let Some(form) = form else {
        return Ok(());
    };
    let rows = parse_rows(form)?;
    if rows.is_empty() {
        return Ok(());
    }
    if !catalog.apply_rows(&rows) {
        return Err(AppError::BadRequest("The role list changed; reload the page".to_string()));
    }
    Ok(())
}

/// GET /roles: the first visit seeds the catalog from the server.
pub async fn list(state: web::Data<ConsoleState>) -> Result<HttpResponse, AppError> {
    state.ensure_roles_loaded().await;
    let roles = state.roles.lock().await;
    render(RoleCatalogTemplate::build(PageContext::new("/roles"), &roles))
}

/// POST /roles/add
pub async fn add(state: web::Data<ConsoleState>, form: RowsForm) -> Result<HttpResponse, AppError> {
    let mut roles = state.roles.lock().await;
    apply_submitted(&mut roles, &form)?;
    roles.add_entry();
    Ok(redirect("/roles"))
}

/// POST /roles/{index}
pub async fn update(
    state: web::Data<ConsoleState>,
    path: web::Path<usize>,
    form: web::Form<EntryForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let role: Role = form.role.parse()?;
    let level: AccessLevel = form.access_level.parse()?;

    let mut roles = state.roles.lock().await;
    if !(roles.set_role(index, role) && roles.set_access_level(index, level)) {
        return Err(AppError::NotFound);
    }
    Ok(redirect("/roles"))
}

/// POST /roles/{index}/remove
pub async fn remove(
    state: web::Data<ConsoleState>,
    path: web::Path<usize>,
    form: RowsForm,
) -> Result<HttpResponse, AppError> {
    let mut roles = state.roles.lock().await;
    apply_submitted(&mut roles, &form)?;
    if !roles.remove_entry(path.into_inner()) {
        return Err(AppError::NotFound);
    }
    Ok(redirect("/roles"))
}

/// POST /roles/persist: apply the submitted rows, then one bulk save.
pub async fn persist(state: web::Data<ConsoleState>, form: RowsForm) -> Result<HttpResponse, AppError> {
    apply_submitted(&mut *state.roles.lock().await, &form)?;
    state.persist_roles().await;
    Ok(redirect("/roles"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn rows_pair_in_order() {
        let rows = parse_rows(&[
            field("role", "Candidate Reviewer"),
            field("access_level", "Edit"),
            field("role", "Interview Scheduler"),
            field("access_level", "Full Control"),
        ])
        .unwrap();
        assert_eq!(
            rows,
            vec![
                RoleCatalogEntry { role: Role::CandidateReviewer, access_level: AccessLevel::Edit },
                RoleCatalogEntry { role: Role::InterviewScheduler, access_level: AccessLevel::FullControl },
            ]
        );
    }

    #[test]
    fn unmatched_or_unknown_rows_rejected() {
        assert!(parse_rows(&[field("role", "Candidate Reviewer")]).is_err());
        assert!(parse_rows(&[field("role", "Astronaut"), field("access_level", "Edit")]).is_err());
    }
}
