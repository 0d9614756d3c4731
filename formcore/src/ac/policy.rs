use serde::{Deserialize, Serialize};
use crate::ac::permission::Permission;

/// What an operation requires, as declared by the enforcement layer for
/// a single request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub required_permissions: Vec<Permission>,
    #[serde(default)]
    pub resource_spec: ResourceSpec,
    #[serde(default)]
    pub classification: Classification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceSpec {
    #[serde(default)]
    pub kind: ResourceKind,
}

/// The shape of resource the operation expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    #[default]
    Unspecified,
    FormOnly,
    Form,
    Submission,
    File,
    /// A file is about to be uploaded, so no file exists yet.
    FileCreate,
}

/// Selects which file access exceptions apply to API actors.
///
/// Unknown tags are read as `Unclassified`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Classification {
    #[default]
    Unclassified,
    Api,
    Webcomponents,
}

mod impls;
