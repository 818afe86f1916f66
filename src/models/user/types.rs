use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::role::{AccessLevel, Role, RoleAssignment};

/// Server-assigned user identifier. Opaque: the API may hand out strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => UserId(s),
            RawId::Number(n) => UserId(n.to_string()),
        })
    }
}

/// Whether an invited user finished self-registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Registered,
    #[serde(alias = "Not Registered")]
    NotRegistered,
    /// Missing or unrecognised on the wire; listed in neither partition.
    #[default]
    #[serde(other)]
    Unknown,
}

fn status_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RegistrationStatus, D::Error> {
    Ok(Option::<RegistrationStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUserRecord")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: Option<String>,
    pub email: String,
    pub roles: Vec<RoleAssignment>,
    pub registration_status: RegistrationStatus,
}

/// Wire shape of [`UserRecord`]. Mongo-style APIs may send `_id`, `id`, or
/// both (virtual ids); `_id` wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<UserId>,
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    roles: Vec<RoleAssignment>,
    #[serde(default, deserialize_with = "status_or_unknown")]
    registration_status: RegistrationStatus,
}

impl TryFrom<RawUserRecord> for UserRecord {
    type Error = String;

    fn try_from(raw: RawUserRecord) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .or(raw.id)
            .ok_or_else(|| "user record has neither `_id` nor `id`".to_string())?;
        Ok(Self {
            id,
            name: raw.name,
            email: raw.email,
            roles: raw.roles,
            registration_status: raw.registration_status,
        })
    }
}

impl UserRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Comma-joined role names, in assignment order.
    pub fn roles_label(&self) -> String {
        self.roles
            .iter()
            .map(|r| r.role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub roles: Vec<RoleAssignment>,
}

impl NewUser {
    /// New users always start with a single view-only assignment.
    pub fn with_role(name: &str, email: &str, role: Role) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            roles: vec![RoleAssignment { role, access_level: AccessLevel::ViewOnly }],
        }
    }
}

/// Scratch record behind the add-user form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

/// Editable fields of [`UserDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Role,
}
