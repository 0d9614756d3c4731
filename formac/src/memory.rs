//! A platform backed by records held in memory.
//!
//! The records are typically loaded from a JSON store, such as:
//!
//! ```json
//! {
//!     "user_roles": [
//!         {"user_id": "alice", "form_id": "form-1", "role": "owner"}
//!     ],
//!     "user_forms": [
//!         {"user_id": "alice", "form_id": "form-1", "permissions": ["form_read"]}
//!     ],
//!     "submission_grants": [
//!         {"user_id": "alice", "submission_id": "s1", "permissions": ["submission_read"]}
//!     ]
//! }
//! ```
//!
//! Setting `"unavailable": true` makes every lookup fail as if the
//! underlying service could not be reached.

use formcore::ac::{
    Permission,
    Role,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryPlatform {
    #[serde(default)]
    pub user_roles: Vec<UserRoleRecord>,
    #[serde(default)]
    pub user_forms: Vec<UserFormRecord>,
    #[serde(default)]
    pub submission_grants: Vec<SubmissionGrantRecord>,
    #[serde(default)]
    pub unavailable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRoleRecord {
    pub user_id: String,
    pub form_id: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserFormRecord {
    pub user_id: String,
    pub form_id: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionGrantRecord {
    pub user_id: String,
    pub submission_id: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

mod impls;
