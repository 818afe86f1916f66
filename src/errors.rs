use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// Errors surfaced by the console's own pages. Gateway failures never end
/// up here: the managers absorb them into their message slots.
#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    BadRequest(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::BadRequest(e) => write!(f, "Bad request: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::BadRequest(e) => HttpResponse::BadRequest().body(e.clone()),
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<crate::models::role::UnknownValue> for AppError {
    fn from(e: crate::models::role::UnknownValue) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Render a template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// 303 back to a page after a form POST.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
