#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required role backend")]
    MissingRoleBackend,
    #[error("Missing required permission backend")]
    MissingPermissionBackend,
}
