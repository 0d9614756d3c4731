use std::fmt;
use super::*;

impl Predicate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Predicate::ApiUserDatabaseSkip => "apiUserDatabaseSkip",
            Predicate::ApiUserFullAccess => "apiUserFullAccess",
            Predicate::ApiUserFileAccess => "apiUserFileAccess",
            Predicate::ApiUserFileApiAccess => "apiUserFileApiAccess",
            Predicate::ApiUserDraftFileRead => "apiUserDraftFileRead",
            Predicate::ApiUserDraftFileDelete => "apiUserDraftFileDelete",
            Predicate::ApiUserFileCreate => "apiUserFileCreate",
            Predicate::PublicUserDatabaseSkip => "publicUserDatabaseSkip",
            Predicate::PublicUserBaseAccess => "publicUserBaseAccess",
            Predicate::PublicUserSubmissionRead => "publicUserSubmissionRead",
            Predicate::PublicUserDraftFileAccess => "publicUserDraftFileAccess",
            Predicate::PublicUserSubmittedFileAccess => "publicUserSubmittedFileAccess",
            Predicate::ReadUserRole => "readUserRole",
            Predicate::HasFormPermissions => "hasFormPermissions",
            Predicate::HasSubmissionPermissions => "hasSubmissionPermissions",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decision {
    pub fn new(predicate: Predicate, result: bool) -> Self {
        Self {
            predicate,
            result,
            metadata: None,
        }
    }

    pub fn with_metadata(
        predicate: Predicate,
        result: bool,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            predicate,
            result,
            metadata: Some(metadata),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.predicate, self.result)
    }
}
