use std::sync::Arc;

use crate::gateway::{Gateway, GatewayError};
use crate::models::role::{AccessLevel, Role, RoleCatalogEntry};

pub const FETCH_FAILED: &str = "Failed to fetch roles. Please try again later.";
pub const PERSIST_FAILED: &str = "Failed to update roles. Please try again.";
pub const PERSISTED: &str = "Roles successfully updated.";

/// Locally edited list of (role, access level) rows, saved in one bulk call.
///
/// Rows are addressed by position: removing row `i` shifts every later row
/// down by one.
pub struct RoleCatalog {
    gateway: Arc<dyn Gateway>,
    entries: Vec<RoleCatalogEntry>,
    loaded: bool,
    is_loading: bool,
    is_updating: bool,
    status: Option<String>,
}

impl std::fmt::Debug for RoleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleCatalog")
            .field("entries", &self.entries)
            .field("loaded", &self.loaded)
            .field("is_loading", &self.is_loading)
            .field("is_updating", &self.is_updating)
            .field("status", &self.status)
            .finish()
    }
}

impl RoleCatalog {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            entries: vec![RoleCatalogEntry::default()],
            loaded: false,
            is_loading: false,
            is_updating: false,
            status: None,
        }
    }

    /// Seed from the server. An empty answer or a failure leaves one default row.
    pub async fn load(&mut self) {
        self.is_loading = true;
        let result = self.gateway.list_roles().await;
        self.finish_load(result);
    }

    /// Load once; later calls keep local edits.
    pub async fn ensure_loaded(&mut self) {
        if self.begin_load() {
            let result = self.gateway.list_roles().await;
            self.finish_load(result);
        }
    }

    /// Marks a seed request as in flight. False when the catalog is already
    /// loaded or a load is outstanding.
    pub fn begin_load(&mut self) -> bool {
        if self.loaded || self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<RoleCatalogEntry>, GatewayError>) {
        match result {
            Ok(entries) if !entries.is_empty() => {
                log::debug!("Loaded {} catalog entries", entries.len());
                self.entries = entries;
            }
            Ok(_) => {
                self.entries = vec![RoleCatalogEntry::default()];
            }
            Err(e) => {
                log::warn!("Role catalog fetch failed: {e}");
                self.entries = vec![RoleCatalogEntry::default()];
                self.status = Some(FETCH_FAILED.to_string());
            }
        }
        self.is_loading = false;
        self.loaded = true;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn entries(&self) -> &[RoleCatalogEntry] {
        &self.entries
    }

    pub fn add_entry(&mut self) {
        self.entries.push(RoleCatalogEntry::default());
    }

    /// Returns false when `index` is out of range.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn set_role(&mut self, index: usize, role: Role) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.role = role;
                true
            }
            None => false,
        }
    }

    pub fn set_access_level(&mut self, index: usize, level: AccessLevel) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.access_level = level;
                true
            }
            None => false,
        }
    }

    /// Send the whole list. Local rows are left untouched either way.
    pub async fn persist(&mut self) {
        let Some(entries) = self.begin_persist() else {
            return;
        };
        let result = self.gateway.update_roles(&entries).await;
        self.finish_persist(result);
    }

    /// Raises `is_updating` and snapshots the rows to send. `None` while a
    /// persist is already outstanding.
    pub fn begin_persist(&mut self) -> Option<Vec<RoleCatalogEntry>> {
        if self.is_updating {
            log::debug!("Persist already in flight");
            return None;
        }
        self.is_updating = true;
        self.status = None;
        Some(self.entries.clone())
    }

    pub fn finish_persist(&mut self, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => {
                log::info!("Persisted {} catalog entries", self.entries.len());
                self.status = Some(PERSISTED.to_string());
            }
            Err(e) => {
                log::warn!("Role catalog update failed: {e}");
                self.status = Some(e.message_or(PERSIST_FAILED));
            }
        }
        self.is_updating = false;
    }

    /// Overwrite every row with the submitted selections, in order. False
    /// (and nothing changed) when the row count no longer matches.
    pub fn apply_rows(&mut self, rows: &[RoleCatalogEntry]) -> bool {
        if rows.len() != self.entries.len() {
            log::warn!(
                "Ignoring {} submitted rows for a catalog of {}",
                rows.len(),
                self.entries.len()
            );
            return false;
        }
        self.entries.copy_from_slice(rows);
        true
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
