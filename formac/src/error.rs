use formcore::ac::{
    Permissions,
    actor::ActorId,
};
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Rbac(#[from] formrbac::error::Error),
    #[error("{actor_id} is missing required permissions {missing}")]
    MissingPermissions {
        actor_id: ActorId,
        missing: Permissions,
    },
}
