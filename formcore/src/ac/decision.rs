use serde::{Deserialize, Serialize};

/// Every predicate the enrichment engine may record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    ApiUserDatabaseSkip,
    ApiUserFullAccess,
    ApiUserFileAccess,
    ApiUserFileApiAccess,
    ApiUserDraftFileRead,
    ApiUserDraftFileDelete,
    ApiUserFileCreate,
    PublicUserDatabaseSkip,
    PublicUserBaseAccess,
    PublicUserSubmissionRead,
    PublicUserDraftFileAccess,
    PublicUserSubmittedFileAccess,
    ReadUserRole,
    HasFormPermissions,
    HasSubmissionPermissions,
}

/// A single audited decision.
///
/// Consumers should only rely on whether a predicate is present and on
/// its result, never on the position within the list of decisions.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Decision {
    pub predicate: Predicate,
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

mod impls;
