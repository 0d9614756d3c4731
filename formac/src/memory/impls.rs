use async_trait::async_trait;
use formcore::{
    ac::{
        Permission,
        Permissions,
        grant::{
            FormFilter,
            UserForm,
            UserRole,
        },
        traits::{
            FormPermissionBackend,
            RoleBackend,
        },
        user::CurrentUser,
    },
    error::BackendError,
};
use formrbac::{
    Builder,
    Enricher,
};
use serde_json::{
    Map,
    Value,
};
use std::{
    fs::File,
    io::{
        BufReader,
        Read,
    },
    path::Path,
    str::FromStr,
};
use crate::error::Error;
use super::*;

impl MemoryPlatform {
    /// Read the store from a JSON object; any other JSON value is
    /// rejected, even where every field would have defaulted.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Self::from_object(serde_json::from_reader(reader)?)
    }

    fn from_object(object: Map<String, Value>) -> Result<Self, Error> {
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::debug!("loading store from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Build an enricher with this platform serving both lookups.
    pub fn into_enricher(self) -> Result<Enricher, Error> {
        Ok(Builder::new()
            .platform(self)
            .build()?)
    }

    fn available(&self) -> Result<(), BackendError> {
        if self.unavailable {
            Err(BackendError::Unavailable("store marked unavailable".into()))
        } else {
            Ok(())
        }
    }
}

impl FromStr for MemoryPlatform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_object(serde_json::from_str(s)?)
    }
}

#[async_trait]
impl RoleBackend for MemoryPlatform {
    async fn read_user_role(
        &self,
        user_id: &str,
        form_id: &str,
    ) -> Result<Vec<UserRole>, BackendError> {
        self.available()?;
        Ok(self.user_roles.iter()
            .filter(|record| record.user_id == user_id && record.form_id == form_id)
            .map(|record| record.role.into())
            .collect())
    }
}

#[async_trait]
impl FormPermissionBackend for MemoryPlatform {
    async fn get_user_forms(
        &self,
        current_user: &CurrentUser,
        filter: &FormFilter,
    ) -> Result<Vec<UserForm>, BackendError> {
        self.available()?;
        // records for the same form are merged into a single entry
        let mut records = self.user_forms.iter()
            .filter(|record| {
                record.user_id == current_user.id
                    && record.form_id == filter.form_id
            })
            .peekable();
        if records.peek().is_none() {
            return Ok(Vec::new());
        }
        let permissions = records
            .flat_map(|record| record.permissions.iter().copied())
            .collect::<Permissions>();
        Ok(vec![UserForm {
            form_id: filter.form_id.clone(),
            permissions: permissions.into(),
        }])
    }

    async fn check_submission_permission(
        &self,
        current_user: &CurrentUser,
        submission_id: &str,
        required: &[Permission],
    ) -> Result<bool, BackendError> {
        self.available()?;
        let granted = self.submission_grants.iter()
            .filter(|record| {
                record.user_id == current_user.id
                    && record.submission_id == submission_id
            })
            .fold(None, |acc: Option<Permissions>, record| {
                let mut acc = acc.unwrap_or_default();
                acc.extend(record.permissions.iter().copied());
                Some(acc)
            });
        Ok(granted.is_some_and(|granted| {
            required.iter().all(|permission| granted.contains(*permission))
        }))
    }
}

#[cfg(test)]
mod test {
    use formcore::ac::{
        Role,
        traits::{
            FormPermissionBackend,
            RoleBackend,
        },
    };
    use super::*;

    const STORE: &str = r#"{
        "user_roles": [
            {"user_id": "alice", "form_id": "form-1", "role": "owner"},
            {"user_id": "alice", "form_id": "form-1", "role": "form_designer"},
            {"user_id": "alice", "form_id": "form-2", "role": "submission_reviewer"},
            {"user_id": "bob", "form_id": "form-1", "role": "form_submitter"}
        ],
        "user_forms": [
            {"user_id": "alice", "form_id": "form-1", "permissions": ["form_read"]},
            {"user_id": "alice", "form_id": "form-1", "permissions": ["form_update", "form_read"]},
            {"user_id": "bob", "form_id": "form-2", "permissions": ["submission_create"]}
        ],
        "submission_grants": [
            {"user_id": "alice", "submission_id": "s1", "permissions": ["submission_read"]},
            {"user_id": "alice", "submission_id": "s1", "permissions": ["submission_update"]},
            {"user_id": "bob", "submission_id": "s2", "permissions": []}
        ]
    }"#;

    #[test]
    fn parse() -> anyhow::Result<()> {
        let platform: MemoryPlatform = STORE.parse()?;
        assert_eq!(platform.user_roles.len(), 4);
        assert_eq!(platform.user_forms.len(), 3);
        assert_eq!(platform.submission_grants.len(), 3);
        assert!(!platform.unavailable);

        let platform: MemoryPlatform = "{}".parse()?;
        assert_eq!(platform, MemoryPlatform::default());
        Ok(())
    }

    #[test]
    fn parse_failure() {
        for input in ["[]", "null", "\"store\"", "1"] {
            assert!(matches!(
                input.parse::<MemoryPlatform>(),
                Err(Error::Json(_)),
            ));
            assert!(matches!(
                MemoryPlatform::from_reader(input.as_bytes()),
                Err(Error::Json(_)),
            ));
        }
        assert!(matches!(
            "{".parse::<MemoryPlatform>(),
            Err(Error::Json(_)),
        ));
        assert!(matches!(
            r#"{"user_roles": [{"user_id": "a", "form_id": "f", "role": "nobody"}]}"#
                .parse::<MemoryPlatform>(),
            Err(Error::Json(_)),
        ));
    }

    #[tokio::test]
    async fn read_user_role() -> anyhow::Result<()> {
        let platform: MemoryPlatform = STORE.parse()?;
        assert_eq!(
            platform.read_user_role("alice", "form-1").await?,
            [UserRole::from(Role::Owner), UserRole::from(Role::FormDesigner)],
        );
        assert_eq!(
            platform.read_user_role("bob", "form-1").await?,
            [UserRole::from(Role::FormSubmitter)],
        );
        assert!(platform.read_user_role("bob", "form-2").await?.is_empty());
        assert!(platform.read_user_role("carol", "form-1").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn get_user_forms() -> anyhow::Result<()> {
        let platform: MemoryPlatform = STORE.parse()?;
        let forms = platform.get_user_forms(
            &CurrentUser::new("alice"),
            &FormFilter::new("form-1"),
        ).await?;
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form_id, "form-1");
        assert_eq!(
            forms[0].permissions,
            [Permission::FormRead, Permission::FormUpdate],
        );

        let forms = platform.get_user_forms(
            &CurrentUser::new("alice"),
            &FormFilter::new("form-2"),
        ).await?;
        assert!(forms.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn check_submission_permission() -> anyhow::Result<()> {
        let platform: MemoryPlatform = STORE.parse()?;
        let alice = CurrentUser::new("alice");
        let bob = CurrentUser::new("bob");
        assert!(platform.check_submission_permission(
            &alice, "s1", &[Permission::SubmissionRead, Permission::SubmissionUpdate],
        ).await?);
        assert!(!platform.check_submission_permission(
            &alice, "s1", &[Permission::SubmissionDelete],
        ).await?);
        assert!(!platform.check_submission_permission(
            &alice, "s2", &[Permission::SubmissionRead],
        ).await?);
        // a grant record exists, even if empty
        assert!(platform.check_submission_permission(&bob, "s2", &[]).await?);
        assert!(!platform.check_submission_permission(&bob, "s1", &[]).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unavailable() -> anyhow::Result<()> {
        let mut platform: MemoryPlatform = STORE.parse()?;
        platform.unavailable = true;
        assert!(matches!(
            platform.read_user_role("alice", "form-1").await,
            Err(BackendError::Unavailable(_)),
        ));
        assert!(matches!(
            platform.get_user_forms(
                &CurrentUser::new("alice"),
                &FormFilter::new("form-1"),
            ).await,
            Err(BackendError::Unavailable(_)),
        ));
        assert!(matches!(
            platform.check_submission_permission(
                &CurrentUser::new("alice"), "s1", &[],
            ).await,
            Err(BackendError::Unavailable(_)),
        ));
        Ok(())
    }
}
