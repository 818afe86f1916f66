//! Remote data gateway: the only path from the console to the API.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::models::registration::RegistrationRequest;
use crate::models::role::{RoleAssignment, RoleCatalogEntry};
use crate::models::user::{NewUser, UserId, UserRecord};

pub use error::GatewayError;
pub use http::HttpGateway;

/// REST operations the console needs. Every method either succeeds or hands
/// back a normalised [`GatewayError`]; no decision logic lives behind it.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError>;
    /// `POST /users`
    async fn create_user(&self, user: &NewUser) -> Result<(), GatewayError>;
    /// `PUT /users/{id}` with `{roles}`
    async fn update_user_roles(&self, id: &UserId, roles: &[RoleAssignment]) -> Result<(), GatewayError>;
    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError>;
    /// `GET /roles`; a missing `roles` field reads as empty.
    async fn list_roles(&self) -> Result<Vec<RoleCatalogEntry>, GatewayError>;
    /// `PUT /roles` with the whole catalog.
    async fn update_roles(&self, roles: &[RoleCatalogEntry]) -> Result<(), GatewayError>;
    /// `POST /users/register/confirm/{userId}`
    async fn confirm_registration(&self, user_id: &str, request: &RegistrationRequest) -> Result<(), GatewayError>;
}
