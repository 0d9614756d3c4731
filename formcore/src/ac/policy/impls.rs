use std::fmt;
use crate::ac::permission::Permission;
use super::*;

impl Policy {
    pub fn new(required_permissions: impl Into<Vec<Permission>>) -> Self {
        Self {
            required_permissions: required_permissions.into(),
            .. Default::default()
        }
    }

    pub fn resource_kind(mut self, val: ResourceKind) -> Self {
        self.resource_spec.kind = val;
        self
    }

    pub fn classification(mut self, val: Classification) -> Self {
        self.classification = val;
        self
    }

    /// Whether the permission is among the required permissions.
    pub fn requires(&self, permission: Permission) -> bool {
        self.required_permissions.contains(&permission)
    }

    /// Whether the required permissions consist of exactly the one
    /// permission and nothing else.
    pub fn requires_only(&self, permission: Permission) -> bool {
        self.required_permissions == [permission]
    }
}

impl From<Classification> for &'static str {
    fn from(value: Classification) -> &'static str {
        match value {
            Classification::Unclassified => "unclassified",
            Classification::Api => "api",
            Classification::Webcomponents => "webcomponents",
        }
    }
}

impl From<Classification> for String {
    fn from(value: Classification) -> Self {
        <&'static str>::from(value).to_string()
    }
}

impl From<String> for Classification {
    fn from(value: String) -> Self {
        match value.as_str() {
            "api" => Classification::Api,
            "webcomponents" => Classification::Webcomponents,
            _ => Classification::Unclassified,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn requires() {
        let policy = Policy::new([Permission::SubmissionRead]);
        assert!(policy.requires(Permission::SubmissionRead));
        assert!(policy.requires_only(Permission::SubmissionRead));
        assert!(!policy.requires(Permission::SubmissionUpdate));

        let policy = Policy::new([
            Permission::SubmissionRead,
            Permission::SubmissionUpdate,
        ]);
        assert!(policy.requires(Permission::SubmissionRead));
        assert!(!policy.requires_only(Permission::SubmissionRead));

        // duplicates are not the singleton list
        let policy = Policy::new([
            Permission::SubmissionRead,
            Permission::SubmissionRead,
        ]);
        assert!(!policy.requires_only(Permission::SubmissionRead));

        let policy = Policy::default();
        assert!(policy.required_permissions.is_empty());
        assert!(!policy.requires_only(Permission::SubmissionRead));
    }

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let policy: Policy = serde_json::from_str(r#"{
            "requiredPermissions": ["submission_read"],
            "resourceSpec": {"kind": "fileCreate"},
            "classification": "webcomponents"
        }"#)?;
        assert_eq!(
            policy,
            Policy::new([Permission::SubmissionRead])
                .resource_kind(ResourceKind::FileCreate)
                .classification(Classification::Webcomponents),
        );

        // missing fields are defaulted rather than rejected
        let policy: Policy = serde_json::from_str("{}")?;
        assert_eq!(policy, Policy::default());
        assert_eq!(policy.classification, Classification::Unclassified);
        assert_eq!(policy.resource_spec.kind, ResourceKind::Unspecified);

        let policy: Policy = serde_json::from_str(r#"{
            "resourceSpec": {"kind": "formOnly"},
            "classification": "somethingElse"
        }"#)?;
        assert_eq!(policy.resource_spec.kind, ResourceKind::FormOnly);
        assert_eq!(policy.classification, Classification::Unclassified);
        Ok(())
    }
}
