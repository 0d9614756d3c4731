use formcore::ac::traits::{
    FormPermissionBackend,
    RoleBackend,
};
use std::sync::Arc;
use crate::Vocabulary;

/// Computes the effective permissions and roles of an actor for a
/// request.
///
/// Holds no per-request state, so a single instance (or clones of it)
/// may serve any number of concurrent requests.
#[derive(Clone)]
pub struct Enricher {
    role_backend: Arc<dyn RoleBackend>,
    permission_backend: Arc<dyn FormPermissionBackend>,
    vocabulary: Vocabulary,
}

mod api;
mod impls;
mod public;
mod user;
