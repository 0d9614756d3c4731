//! Records returned by the collaborator lookups.

use serde::{Deserialize, Serialize};
use crate::ac::{
    permission::Permission,
    role::Role,
};

/// A role held by a user on a form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRole {
    pub role: Role,
}

/// Selects the form entries returned by a form permission lookup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFilter {
    pub form_id: String,
}

/// The permissions a user holds on a single form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub form_id: String,
    pub permissions: Vec<Permission>,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        Self { role }
    }
}

impl FormFilter {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self { form_id: form_id.into() }
    }
}
