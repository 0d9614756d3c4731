use enumset::{
    EnumSet,
    EnumSetType,
};
use serde::{Deserialize, Serialize};

/// The closed set of permissions understood by the form platform.
///
/// The serialized form is the lowercase identifier (e.g. `form_read`),
/// which is also what `Display` and `FromStr` operate on.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    DesignCreate,
    DesignDelete,
    DesignRead,
    DesignUpdate,
    DocumentTemplateCreate,
    DocumentTemplateDelete,
    DocumentTemplateRead,
    EmailTemplateRead,
    EmailTemplateUpdate,
    FormApiCreate,
    FormApiDelete,
    FormApiRead,
    FormApiUpdate,
    FormDelete,
    FormRead,
    FormUpdate,
    SubmissionCreate,
    SubmissionDelete,
    SubmissionRead,
    SubmissionReview,
    SubmissionUpdate,
    TeamRead,
    TeamUpdate,
}

/// A set of permissions.
///
/// Serialized as a list of identifiers, ordered by declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct Permissions(pub EnumSet<Permission>);

mod impls;
