use serde::{Deserialize, Serialize};

use crate::models::role::Role;
use crate::validate;

/// Fields posted by the invitation page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub job_role: String,
}

/// Body of `POST /users/register/confirm/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub job_role: Role,
}

impl RegistrationForm {
    /// Local checks run before anything is sent. Returns every problem found.
    pub fn validate(&self) -> Result<RegistrationRequest, Vec<String>> {
        let mut errors = vec![];
        errors.extend(validate::validate_required(&self.name, "Name"));
        errors.extend(validate::validate_required(&self.email, "Email"));
        errors.extend(validate::validate_required(&self.password, "Password"));
        errors.extend(validate::validate_passwords_match(&self.password, &self.confirm_password));

        let job_role = match self.job_role.parse::<Role>() {
            Ok(role) => Some(role),
            Err(_) => {
                errors.push("Job role is required".to_string());
                None
            }
        };

        match job_role {
            Some(job_role) if errors.is_empty() => Ok(RegistrationRequest {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                job_role,
            }),
            _ => Err(errors),
        }
    }
}
