use async_trait::async_trait;
use formcore::{
    ac::{
        grant::{
            FormFilter,
            UserForm,
            UserRole,
        },
        permission::Permission,
        traits::{
            FormPermissionBackend,
            RoleBackend,
        },
        user::CurrentUser,
    },
    error::BackendError,
};
use mockall::mock;

mock! {
    pub Platform {}

    #[async_trait]
    impl RoleBackend for Platform {
        async fn read_user_role(
            &self,
            user_id: &str,
            form_id: &str,
        ) -> Result<Vec<UserRole>, BackendError>;
    }

    #[async_trait]
    impl FormPermissionBackend for Platform {
        async fn get_user_forms(
            &self,
            current_user: &CurrentUser,
            filter: &FormFilter,
        ) -> Result<Vec<UserForm>, BackendError>;
        async fn check_submission_permission(
            &self,
            current_user: &CurrentUser,
            submission_id: &str,
            required: &[Permission],
        ) -> Result<bool, BackendError>;
    }
}

/// A platform that must never be consulted; any lookup panics.
pub fn untouched_platform() -> MockPlatform {
    let mut platform = MockPlatform::new();
    platform.expect_read_user_role()
        .never();
    platform.expect_get_user_forms()
        .never();
    platform.expect_check_submission_permission()
        .never();
    platform
}

/// A platform where every lookup fails as if the store went away.
pub fn unavailable_platform() -> MockPlatform {
    let mut platform = MockPlatform::new();
    platform.expect_read_user_role()
        .returning(|_, _| Err(BackendError::Unavailable("connection refused".into())));
    platform.expect_get_user_forms()
        .returning(|_, _| Err(BackendError::Unavailable("connection refused".into())));
    platform.expect_check_submission_permission()
        .returning(|_, _, _| Err(BackendError::Unavailable("connection refused".into())));
    platform
}
