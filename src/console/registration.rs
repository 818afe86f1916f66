use crate::gateway::Gateway;
use crate::models::registration::RegistrationForm;

pub const REGISTERED: &str = "Registration successful!";
pub const REGISTRATION_FAILED: &str = "Error completing registration.";

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Completed,
    /// Local validation problems, or the single server/transport message.
    Rejected(Vec<String>),
}

/// One-shot submit of the invitation form. Validation failures never reach the gateway.
pub async fn complete_registration(
    gateway: &dyn Gateway,
    user_id: &str,
    form: &RegistrationForm,
) -> RegistrationOutcome {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return RegistrationOutcome::Rejected(errors),
    };

    match gateway.confirm_registration(user_id, &request).await {
        Ok(()) => {
            log::info!("Registration confirmed for invite {user_id}");
            RegistrationOutcome::Completed
        }
        Err(e) => {
            log::warn!("Registration for invite {user_id} failed: {e}");
            RegistrationOutcome::Rejected(vec![e.message_or(REGISTRATION_FAILED)])
        }
    }
}
