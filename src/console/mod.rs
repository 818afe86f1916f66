//! Single-owner console state: one user directory and one role catalog.

pub mod flash;
pub mod registration;
pub mod roles;
pub mod scheduler;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::gateway::Gateway;
use crate::models::user::UserId;

pub use roles::RoleCatalog;
pub use users::UserDirectory;

/// Shared by every handler. Each manager is the only writer of its list.
///
/// The methods below never hold a manager lock across a gateway call: they
/// lock to begin an operation, await the gateway unlocked, then lock again
/// to apply the result. Other requests meanwhile see `loading` /
/// `is_updating` raised and are refused instead of queued.
pub struct ConsoleState {
    pub gateway: Arc<dyn Gateway>,
    pub users: Mutex<UserDirectory>,
    pub roles: Mutex<RoleCatalog>,
}

impl ConsoleState {
    pub fn new(gateway: Arc<dyn Gateway>, flash_ttl: Duration) -> Self {
        Self {
            users: Mutex::new(UserDirectory::new(gateway.clone(), flash_ttl)),
            roles: Mutex::new(RoleCatalog::new(gateway.clone())),
            gateway,
        }
    }

    pub async fn tick(&self, now: DateTime<Utc>) {
        self.users.lock().await.tick(now);
    }

    pub async fn refresh_users(&self) {
        let started = self.users.lock().await.begin_refresh();
        if !started {
            return;
        }
        let result = self.gateway.list_users().await;
        self.users.lock().await.finish_refresh(result);
    }

    pub async fn save_user_edit(&self, id: &UserId) {
        let roles = self.users.lock().await.begin_save_edit(id);
        let Some(roles) = roles else {
            return;
        };
        let result = self.gateway.update_user_roles(id, &roles).await;
        let saved = self.users.lock().await.finish_save_edit(id, result);
        if saved {
            self.refresh_users().await;
        }
    }

    pub async fn confirm_user_delete(&self) {
        let pending = self.users.lock().await.begin_delete();
        let Some(id) = pending else {
            return;
        };
        let result = self.gateway.delete_user(&id).await;
        let deleted = self.users.lock().await.finish_delete(&id, result);
        if deleted {
            self.refresh_users().await;
        }
    }

    pub async fn submit_new_user(&self) {
        let new_user = self.users.lock().await.begin_add();
        let Some(new_user) = new_user else {
            return;
        };
        let result = self.gateway.create_user(&new_user).await;
        let created = self.users.lock().await.finish_add(&new_user, result);
        if created {
            self.refresh_users().await;
        }
    }

    /// First visit to the catalog seeds it from the server.
    pub async fn ensure_roles_loaded(&self) {
        let started = self.roles.lock().await.begin_load();
        if !started {
            return;
        }
        let result = self.gateway.list_roles().await;
        self.roles.lock().await.finish_load(result);
    }

    pub async fn persist_roles(&self) {
        let entries = self.roles.lock().await.begin_persist();
        let Some(entries) = entries else {
            return;
        };
        let result = self.gateway.update_roles(&entries).await;
        self.roles.lock().await.finish_persist(result);
    }
}
