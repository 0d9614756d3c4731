use serde::{Deserialize, Serialize};

/// The concrete form, submission or file a request targets.
///
/// Every field is optional; a field counts as present whenever it is
/// `Some`, regardless of its contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_form: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormRef {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRef {
    pub submission_id: String,
}

/// A stored file.  Files uploaded as part of a draft have no submission
/// until the submission is finalized.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub id: String,
    #[serde(default)]
    pub form_submission_id: Option<String>,
}

mod impls;
