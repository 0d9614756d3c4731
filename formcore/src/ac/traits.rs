use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    grant::{
        FormFilter,
        UserForm,
        UserRole,
    },
    permission::Permission,
    user::CurrentUser,
};

#[async_trait]
pub trait RoleBackend: Send + Sync {
    /// The roles the user holds on the form.
    async fn read_user_role(
        &self,
        user_id: &str,
        form_id: &str,
    ) -> Result<Vec<UserRole>, BackendError>;
}

#[async_trait]
pub trait FormPermissionBackend: Send + Sync {
    /// The forms, with their granted permissions, available to the
    /// user that match the filter.
    async fn get_user_forms(
        &self,
        current_user: &CurrentUser,
        filter: &FormFilter,
    ) -> Result<Vec<UserForm>, BackendError>;
    /// Whether the user holds every one of the required permissions on
    /// the submission.
    async fn check_submission_permission(
        &self,
        current_user: &CurrentUser,
        submission_id: &str,
        required: &[Permission],
    ) -> Result<bool, BackendError>;
}
