//! User directory: the canonical user list and every workflow that changes it.
//!
//! Mutations are confirm-then-refetch: a change is sent to the gateway, and
//! only after the server accepts it is the whole list reloaded. A failed call
//! never touches the canonical list; it only fills the error slot.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::gateway::{Gateway, GatewayError};
use crate::models::role::{AccessLevel, Role, RoleAssignment};
use crate::models::user::{DirectoryView, DraftField, NewUser, UserDraft, UserFilter, UserId, UserRecord};
use crate::validate;
use super::flash::TransientMessage;

pub const FETCH_FAILED: &str = "Failed to fetch users";
pub const UPDATE_FAILED: &str = "Failed to update user";
pub const DELETE_FAILED: &str = "Failed to delete user";
pub const CREATE_FAILED: &str = "Failed to create user";
pub const DRAFT_INCOMPLETE: &str = "Name, email and role are required";
pub const SCRATCH_INCOMPLETE: &str = "Select a role and an access level";

pub const UPDATED: &str = "User updated successfully";
pub const DELETED: &str = "User deleted successfully";
pub const ADDED: &str = "User added successfully";

pub struct UserDirectory {
    gateway: Arc<dyn Gateway>,
    users: Vec<UserRecord>,
    filter: UserFilter,
    editing: Option<UserId>,
    selected_role: Option<Role>,
    selected_permission: Option<AccessLevel>,
    loading: bool,
    error: Option<String>,
    success: TransientMessage,
    add_form_open: bool,
    draft: UserDraft,
    pending_delete: Option<UserId>,
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("users", &self.users.len())
            .field("filter", &self.filter)
            .field("editing", &self.editing)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("pending_delete", &self.pending_delete)
            .finish()
    }
}

impl UserDirectory {
    pub fn new(gateway: Arc<dyn Gateway>, flash_ttl: Duration) -> Self {
        Self {
            gateway,
            users: Vec::new(),
            filter: UserFilter::default(),
            editing: None,
            selected_role: None,
            selected_permission: None,
            loading: false,
            error: None,
            success: TransientMessage::new(flash_ttl),
            add_form_open: false,
            draft: UserDraft::default(),
            pending_delete: None,
        }
    }

    // ---------------------------------------------------------------------
    // Canonical list
    // ---------------------------------------------------------------------

    /// Reload the whole list. On failure the previous list is kept as-is.
    pub async fn refresh(&mut self) {
        if self.begin_refresh() {
            let result = self.gateway.list_users().await;
            self.finish_refresh(result);
        }
    }

    /// Raises `loading`. False while another gateway call is outstanding.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            log::debug!("User refresh skipped, a request is in flight");
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<UserRecord>, GatewayError>) {
        match result {
            Ok(users) => {
                log::debug!("Loaded {} users", users.len());
                self.users = users;
                self.error = None;
            }
            Err(e) => {
                log::warn!("User refresh failed: {e}");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn find(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| &u.id == id)
    }

    // ---------------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------------

    pub fn search(&mut self, term: &str) {
        self.filter.search = term.to_string();
    }

    pub fn filter_by_role(&mut self, role: Option<Role>) {
        self.filter.role = role;
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn view(&self) -> DirectoryView<'_> {
        self.filter.view(&self.users)
    }

    // ---------------------------------------------------------------------
    // Edit flow
    // ---------------------------------------------------------------------

    /// Open the role editor for `id`, or close it if that user is already
    /// being edited. Only the first role assignment is editable here.
    pub fn toggle_edit(&mut self, id: &UserId) {
        if self.editing.as_ref() == Some(id) {
            self.end_edit();
            return;
        }
        let Some(user) = self.find(id) else {
            log::warn!("Edit requested for unknown user {id}");
            return;
        };
        let first = user.roles.first().copied();
        self.selected_role = first.map(|r| r.role);
        self.selected_permission = first.map(|r| r.access_level);
        self.editing = Some(id.clone());
    }

    fn end_edit(&mut self) {
        self.editing = None;
        self.selected_role = None;
        self.selected_permission = None;
    }

    pub fn change_scratch_role(&mut self, role: Role) {
        if self.editing.is_some() {
            self.selected_role = Some(role);
        }
    }

    pub fn change_scratch_permission(&mut self, level: AccessLevel) {
        if self.editing.is_some() {
            self.selected_permission = Some(level);
        }
    }

    /// Send the scratch selection as the user's only role assignment.
    /// On failure the editor stays open so the operator can retry.
    pub async fn save_edit(&mut self, id: &UserId) {
        let Some(roles) = self.begin_save_edit(id) else {
            return;
        };
        let result = self.gateway.update_user_roles(id, &roles).await;
        if self.finish_save_edit(id, result) {
            self.refresh().await;
        }
    }

    /// The assignment list to send for `id`. `None` when `id` is not the
    /// user being edited, the scratch is incomplete, or a call is in flight.
    pub fn begin_save_edit(&mut self, id: &UserId) -> Option<Vec<RoleAssignment>> {
        if self.loading {
            log::debug!("Save for user {id} skipped, a request is in flight");
            return None;
        }
        if self.editing.as_ref() != Some(id) {
            log::warn!("Save posted for user {id}, who is not being edited");
            return None;
        }
        let (Some(role), Some(access_level)) = (self.selected_role, self.selected_permission) else {
            self.error = Some(SCRATCH_INCOMPLETE.to_string());
            return None;
        };
        self.loading = true;
        Some(vec![RoleAssignment { role, access_level }])
    }

    /// Returns true when the server accepted the change and the list should
    /// be re-fetched.
    pub fn finish_save_edit(&mut self, id: &UserId, result: Result<(), GatewayError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                log::info!("Updated roles for user {id}");
                if self.editing.as_ref() == Some(id) {
                    self.end_edit();
                }
                self.success.set(UPDATED, Utc::now());
                true
            }
            Err(e) => {
                log::warn!("Updating user {id} failed: {e}");
                self.error = Some(UPDATE_FAILED.to_string());
                false
            }
        }
    }

    pub fn editing(&self) -> Option<&UserId> {
        self.editing.as_ref()
    }

    pub fn scratch_role(&self) -> Option<Role> {
        self.selected_role
    }

    pub fn scratch_permission(&self) -> Option<AccessLevel> {
        self.selected_permission
    }

    // ---------------------------------------------------------------------
    // Delete flow
    // ---------------------------------------------------------------------

    pub fn request_delete(&mut self, id: &UserId) {
        self.pending_delete = Some(id.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending user. The prompt is dismissed whatever the outcome.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.begin_delete() else {
            return;
        };
        let result = self.gateway.delete_user(&id).await;
        if self.finish_delete(&id, result) {
            self.refresh().await;
        }
    }

    /// Takes the pending id, which dismisses the prompt.
    pub fn begin_delete(&mut self) -> Option<UserId> {
        if self.loading {
            log::debug!("Delete skipped, a request is in flight");
            return None;
        }
        let id = self.pending_delete.take()?;
        self.loading = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, id: &UserId, result: Result<(), GatewayError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                log::info!("Deleted user {id}");
                if self.editing.as_ref() == Some(id) {
                    self.end_edit();
                }
                self.success.set(DELETED, Utc::now());
                true
            }
            Err(e) => {
                log::warn!("Deleting user {id} failed: {e}");
                self.error = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    pub fn pending_delete(&self) -> Option<&UserId> {
        self.pending_delete.as_ref()
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    // ---------------------------------------------------------------------
    // Add flow
    // ---------------------------------------------------------------------

    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
        self.draft = UserDraft::default();
    }

    pub fn update_draft(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.draft.name = value.to_string(),
            DraftField::Email => self.draft.email = value.to_string(),
            DraftField::Role => self.draft.role = value.parse().ok(),
        }
    }

    /// Validate locally, then create the user with a view-only assignment.
    /// Nothing is sent when the draft is incomplete.
    pub async fn submit_add(&mut self) {
        let Some(new_user) = self.begin_add() else {
            return;
        };
        let result = self.gateway.create_user(&new_user).await;
        if self.finish_add(&new_user, result) {
            self.refresh().await;
        }
    }

    pub fn begin_add(&mut self) -> Option<NewUser> {
        if self.loading {
            log::debug!("Add skipped, a request is in flight");
            return None;
        }
        let role = match self.draft.role {
            Some(role) if validate::all_present(&[self.draft.name.as_str(), self.draft.email.as_str()]) => role,
            _ => {
                self.error = Some(DRAFT_INCOMPLETE.to_string());
                return None;
            }
        };
        self.loading = true;
        Some(NewUser::with_role(&self.draft.name, &self.draft.email, role))
    }

    /// On success the form closes and its draft is discarded; on failure
    /// both stay for another attempt.
    pub fn finish_add(&mut self, new_user: &NewUser, result: Result<(), GatewayError>) -> bool {
        self.loading = false;
        match result {
            Ok(()) => {
                log::info!("Created user '{}'", new_user.name);
                self.success.set(ADDED, Utc::now());
                self.close_add_form();
                true
            }
            Err(e) => {
                log::warn!("Creating user '{}' failed: {e}", new_user.name);
                self.error = Some(e.message_or(CREATE_FAILED));
                false
            }
        }
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    // ---------------------------------------------------------------------
    // Status slots
    // ---------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.current(Utc::now())
    }

    pub fn success_at(&self, now: DateTime<Utc>) -> Option<&str> {
        self.success.current(now)
    }

    /// Expire the success message if its deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.success.tick(now) {
            log::debug!("Success message expired");
        }
    }
}
