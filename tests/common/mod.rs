//! Shared test infrastructure: an in-memory gateway that records every call.
//!
//! # Mock Gateway
//! - `MockGateway::with_users()` - seeds the server-side user list
//! - `fail(op, error)` - makes one operation fail until `recover(op)`
//! - `calls()` - every call made, in order
//! - `hold(op)` - parks calls to `op` until the returned gate is released

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use recruitdesk::gateway::{Gateway, GatewayError};
use recruitdesk::models::registration::RegistrationRequest;
use recruitdesk::models::role::{AccessLevel, Role, RoleAssignment, RoleCatalogEntry};
use recruitdesk::models::user::{NewUser, RegistrationStatus, UserId, UserRecord};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const FLASH_TTL: Duration = Duration::from_secs(5);

// ============================================================================
// MOCK GATEWAY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListUsers,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ListRoles,
    UpdateRoles,
    ConfirmRegistration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListUsers,
    CreateUser(NewUser),
    UpdateUser(UserId, Vec<RoleAssignment>),
    DeleteUser(UserId),
    ListRoles,
    UpdateRoles(Vec<RoleCatalogEntry>),
    ConfirmRegistration(String, RegistrationRequest),
}

/// Behaves like a well-behaved server: accepted mutations change the stored
/// list, so a later `list_users` reflects them.
#[derive(Debug, Default)]
pub struct MockGateway {
    users: Mutex<Vec<UserRecord>>,
    roles: Mutex<Vec<RoleCatalogEntry>>,
    failures: Mutex<HashMap<Op, GatewayError>>,
    calls: Mutex<Vec<Call>>,
    gates: Mutex<HashMap<Op, Arc<Notify>>>,
    next_id: AtomicU64,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_users(users: Vec<UserRecord>) -> Arc<Self> {
        let gw = Self::default();
        *gw.users.lock().expect("users lock") = users;
        gw.next_id.store(100, Ordering::SeqCst);
        Arc::new(gw)
    }

    pub fn set_roles(&self, roles: Vec<RoleCatalogEntry>) {
        *self.roles.lock().expect("roles lock") = roles;
    }

    pub fn stored_roles(&self) -> Vec<RoleCatalogEntry> {
        self.roles.lock().expect("roles lock").clone()
    }

    pub fn stored_users(&self) -> Vec<UserRecord> {
        self.users.lock().expect("users lock").clone()
    }

    pub fn fail(&self, op: Op, error: GatewayError) {
        self.failures.lock().expect("failures lock").insert(op, error);
    }

    pub fn recover(&self, op: Op) {
        self.failures.lock().expect("failures lock").remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(
                (c, op),
                (Call::ListUsers, Op::ListUsers)
                    | (Call::CreateUser(_), Op::CreateUser)
                    | (Call::UpdateUser(..), Op::UpdateUser)
                    | (Call::DeleteUser(_), Op::DeleteUser)
                    | (Call::ListRoles, Op::ListRoles)
                    | (Call::UpdateRoles(_), Op::UpdateRoles)
                    | (Call::ConfirmRegistration(..), Op::ConfirmRegistration)
            ))
            .count()
    }

    /// Calls to `op` are recorded, then wait until `notify_one()` on the
    /// returned gate (once per held call).
    pub fn hold(&self, op: Op) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates.lock().expect("gates lock").insert(op, gate.clone());
        gate
    }

    /// Yields until `op` has been called `n` times.
    pub async fn wait_for(&self, op: Op, n: usize) {
        while self.count(op) < n {
            tokio::task::yield_now().await;
        }
    }

    pub fn clear_calls(&self) {
        self.calls.lock().expect("calls lock").clear();
    }

    async fn record(&self, call: Call, op: Op) -> Result<(), GatewayError> {
        self.calls.lock().expect("calls lock").push(call);
        let gate = self.gates.lock().expect("gates lock").get(&op).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.failures.lock().expect("failures lock").get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        self.record(Call::ListUsers, Op::ListUsers).await?;
        Ok(self.stored_users())
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), GatewayError> {
        self.record(Call::CreateUser(user.clone()), Op::CreateUser).await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().expect("users lock").push(UserRecord {
            id: UserId::new(id.to_string()),
            name: Some(user.name.clone()),
            email: user.email.clone(),
            roles: user.roles.clone(),
            registration_status: RegistrationStatus::NotRegistered,
        });
        Ok(())
    }

    async fn update_user_roles(&self, id: &UserId, roles: &[RoleAssignment]) -> Result<(), GatewayError> {
        self.record(Call::UpdateUser(id.clone(), roles.to_vec()), Op::UpdateUser).await?;
        if let Some(user) = self.users.lock().expect("users lock").iter_mut().find(|u| &u.id == id) {
            user.roles = roles.to_vec();
        }
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), GatewayError> {
        self.record(Call::DeleteUser(id.clone()), Op::DeleteUser).await?;
        self.users.lock().expect("users lock").retain(|u| &u.id != id);
        Ok(())
    }

    async fn list_roles(&self) -> Result<Vec<RoleCatalogEntry>, GatewayError> {
        self.record(Call::ListRoles, Op::ListRoles).await?;
        Ok(self.stored_roles())
    }

    async fn update_roles(&self, roles: &[RoleCatalogEntry]) -> Result<(), GatewayError> {
        self.record(Call::UpdateRoles(roles.to_vec()), Op::UpdateRoles).await?;
        self.set_roles(roles.to_vec());
        Ok(())
    }

    async fn confirm_registration(&self, user_id: &str, request: &RegistrationRequest) -> Result<(), GatewayError> {
        self.record(
            Call::ConfirmRegistration(user_id.to_string(), request.clone()),
            Op::ConfirmRegistration,
        ).await
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn user(id: &str, name: &str, role: Role, level: AccessLevel, status: RegistrationStatus) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        name: Some(name.to_string()),
        email: format!("{}@example.com", name.to_lowercase()),
        roles: vec![RoleAssignment { role, access_level: level }],
        registration_status: status,
    }
}

/// Ann (registered editor), Ben (unregistered reviewer), Cleo (registered scheduler).
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user("1", "Ann", Role::JobPostEditor, AccessLevel::ViewOnly, RegistrationStatus::Registered),
        user("2", "Ben", Role::CandidateReviewer, AccessLevel::Edit, RegistrationStatus::NotRegistered),
        user("3", "Cleo", Role::InterviewScheduler, AccessLevel::FullControl, RegistrationStatus::Registered),
    ]
}

pub fn server_error(message: &str) -> GatewayError {
    GatewayError::Server { status: 500, message: Some(message.to_string()) }
}

pub fn transport_error() -> GatewayError {
    GatewayError::Transport("connection refused".to_string())
}
