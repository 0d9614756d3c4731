use enumset::{
    EnumSet,
    EnumSetType,
};
use serde::{Deserialize, Serialize};

/// Roles an agent may hold against a form.
///
/// Roles are informational; access decisions are made on permissions.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    TeamManager,
    FormDesigner,
    SubmissionReviewer,
    SubmissionApprover,
    FormSubmitter,
    Admin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct Roles(pub EnumSet<Role>);

mod impls;
