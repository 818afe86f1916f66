use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of console roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "Job Post Editor", alias = "job-post-editor")]
    JobPostEditor,
    #[serde(rename = "Candidate Reviewer", alias = "candidate-reviewer")]
    CandidateReviewer,
    #[serde(rename = "Interview Scheduler", alias = "interview-scheduler")]
    InterviewScheduler,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::JobPostEditor, Role::CandidateReviewer, Role::InterviewScheduler];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobPostEditor => "Job Post Editor",
            Role::CandidateReviewer => "Candidate Reviewer",
            Role::InterviewScheduler => "Interview Scheduler",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Job Post Editor" | "job-post-editor" => Ok(Role::JobPostEditor),
            "Candidate Reviewer" | "candidate-reviewer" => Ok(Role::CandidateReviewer),
            "Interview Scheduler" | "interview-scheduler" => Ok(Role::InterviewScheduler),
            other => Err(UnknownValue { kind: "role", value: other.to_string() }),
        }
    }
}

/// Access level attached to a role. `Edit` and `Full Control` are the
/// canonical spellings; `Editor` and `Full-control` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    #[serde(rename = "View-only")]
    ViewOnly,
    #[serde(rename = "Edit", alias = "Editor")]
    Edit,
    #[serde(rename = "Full Control", alias = "Full-control")]
    FullControl,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [AccessLevel::ViewOnly, AccessLevel::Edit, AccessLevel::FullControl];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::ViewOnly => "View-only",
            AccessLevel::Edit => "Edit",
            AccessLevel::FullControl => "Full Control",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "View-only" => Ok(AccessLevel::ViewOnly),
            "Edit" | "Editor" => Ok(AccessLevel::Edit),
            "Full Control" | "Full-control" => Ok(AccessLevel::FullControl),
            other => Err(UnknownValue { kind: "access level", value: other.to_string() }),
        }
    }
}

/// A form or query value outside the closed sets above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownValue {}

/// One (role, access level) pair held by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: Role,
    pub access_level: AccessLevel,
}

/// One row of the role catalog. Rows have no id: they are addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCatalogEntry {
    pub role: Role,
    pub access_level: AccessLevel,
}
