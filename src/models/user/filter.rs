// src/models/user/filter.rs
use crate::models::role::Role;
use super::types::{RegistrationStatus, UserRecord};

/// Search and role filter applied to the canonical user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    /// `None` matches every user.
    pub role: Option<Role>,
}

impl UserFilter {
    /// Case-insensitive substring match on the name. A nameless user only
    /// matches the empty term.
    pub fn matches_search(&self, user: &UserRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        user.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&term))
    }

    pub fn matches_role(&self, user: &UserRecord) -> bool {
        match self.role {
            Some(role) => user.has_role(role),
            None => true,
        }
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        self.matches_search(user) && self.matches_role(user)
    }

    pub fn apply<'a>(&self, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        users.iter().filter(|u| self.matches(u)).collect()
    }

    /// Filter first, then split by registration status.
    pub fn view<'a>(&self, users: &'a [UserRecord]) -> DirectoryView<'a> {
        let filtered = self.apply(users);
        let by_status = |status: RegistrationStatus| {
            filtered
                .iter()
                .copied()
                .filter(|u| u.registration_status == status)
                .collect::<Vec<_>>()
        };
        let registered = by_status(RegistrationStatus::Registered);
        let not_registered = by_status(RegistrationStatus::NotRegistered);
        DirectoryView { filtered, registered, not_registered }
    }
}

/// Read-only views derived from the canonical list. Never mutated directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView<'a> {
    pub filtered: Vec<&'a UserRecord>,
    pub registered: Vec<&'a UserRecord>,
    pub not_registered: Vec<&'a UserRecord>,
}
