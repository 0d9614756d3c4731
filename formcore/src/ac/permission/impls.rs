use enumset::EnumSet;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Permission,
    Permissions,
};

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

impl From<Permission> for &'static str {
    fn from(permission: Permission) -> &'static str {
        match permission {
            Permission::DesignCreate => "design_create",
            Permission::DesignDelete => "design_delete",
            Permission::DesignRead => "design_read",
            Permission::DesignUpdate => "design_update",
            Permission::DocumentTemplateCreate => "document_template_create",
            Permission::DocumentTemplateDelete => "document_template_delete",
            Permission::DocumentTemplateRead => "document_template_read",
            Permission::EmailTemplateRead => "email_template_read",
            Permission::EmailTemplateUpdate => "email_template_update",
            Permission::FormApiCreate => "form_api_create",
            Permission::FormApiDelete => "form_api_delete",
            Permission::FormApiRead => "form_api_read",
            Permission::FormApiUpdate => "form_api_update",
            Permission::FormDelete => "form_delete",
            Permission::FormRead => "form_read",
            Permission::FormUpdate => "form_update",
            Permission::SubmissionCreate => "submission_create",
            Permission::SubmissionDelete => "submission_delete",
            Permission::SubmissionRead => "submission_read",
            Permission::SubmissionReview => "submission_review",
            Permission::SubmissionUpdate => "submission_update",
            Permission::TeamRead => "team_read",
            Permission::TeamUpdate => "team_update",
        }
    }
}

impl FromStr for Permission {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnumSet::<Permission>::all()
            .iter()
            .find(|permission| <&'static str>::from(*permission) == s)
            .ok_or_else(|| ValueError::Unsupported(s.to_string()))
    }
}

impl Permissions {
    pub fn all() -> Self {
        Self(EnumSet::all())
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(permission)
    }

    /// Returns true if the permission was not already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn is_superset(&self, other: &Permissions) -> bool {
        self.0.is_superset(other.0)
    }

    pub fn difference(&self, other: &Permissions) -> Permissions {
        Self(self.0.difference(other.0))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> {
        self.0.iter()
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item=Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Permission> for Permissions {
    fn extend<I: IntoIterator<Item=Permission>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl From<Vec<Permission>> for Permissions {
    fn from(value: Vec<Permission>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Permissions> for Vec<Permission> {
    fn from(value: Permissions) -> Self {
        value.iter().collect()
    }
}

impl<const N: usize> From<[Permission; N]> for Permissions {
    fn from(value: [Permission; N]) -> Self {
        value.into_iter().collect()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, permission) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{permission}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use crate::error::ValueError;
    use super::*;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        assert_eq!(Permission::FormRead.to_string(), "form_read");
        assert_eq!(Permission::FormRead, Permission::from_str("form_read")?);
        assert_eq!(
            Permission::DocumentTemplateRead.to_string(),
            "document_template_read",
        );
        assert_eq!(
            Permission::SubmissionUpdate,
            Permission::from_str("submission_update")?,
        );
        assert!(matches!(
            Permission::from_str("FORM_READ")
                .expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "FORM_READ",
        ));
        Ok(())
    }

    #[test]
    fn every_identifier_parses_back() -> anyhow::Result<()> {
        for permission in Permissions::all().iter() {
            assert_eq!(permission, Permission::from_str(&permission.to_string())?);
        }
        Ok(())
    }

    #[test]
    fn serde_matches_display() -> anyhow::Result<()> {
        for permission in Permissions::all().iter() {
            assert_eq!(
                serde_json::to_string(&permission)?,
                format!("\"{permission}\""),
            );
        }
        Ok(())
    }

    #[test]
    fn set_serialized_as_list() -> anyhow::Result<()> {
        let permissions: Permissions = serde_json::from_str(
            r#"["submission_read", "form_read", "form_read"]"#
        )?;
        assert_eq!(permissions.len(), 2);
        assert_eq!(
            serde_json::to_string(&permissions)?,
            r#"["form_read","submission_read"]"#,
        );
        assert_eq!(permissions.to_string(), "[form_read, submission_read]");
        Ok(())
    }

    #[test]
    fn set_operations() {
        let granted = Permissions::from([
            Permission::FormRead,
            Permission::SubmissionRead,
        ]);
        let required = Permissions::from([
            Permission::SubmissionRead,
            Permission::SubmissionUpdate,
        ]);
        assert!(!granted.is_superset(&required));
        assert_eq!(
            required.difference(&granted),
            Permissions::from([Permission::SubmissionUpdate]),
        );
        let mut granted = granted;
        assert!(granted.insert(Permission::SubmissionUpdate));
        assert!(!granted.insert(Permission::SubmissionUpdate));
        assert!(granted.is_superset(&required));
    }
}
