//! Enrichment results.
//!
//! An [`EnrichmentResult`] can only be produced by finishing an
//! [`EnrichmentBuilder`]; the builder only ever accumulates, and once
//! finished the result exposes read-only views of what was collected.

use serde::{Deserialize, Serialize};
use crate::ac::{
    actor::ActorId,
    decision::Decision,
    permission::{
        Permission,
        Permissions,
    },
    role::Roles,
};

/// The effective permissions and roles an actor holds for a request,
/// with the decisions that produced them.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    actor_id: ActorId,
    required: Vec<Permission>,
    permissions: Permissions,
    roles: Roles,
    decisions: Vec<Decision>,
}

#[derive(Debug)]
pub struct EnrichmentBuilder {
    actor_id: ActorId,
    required: Vec<Permission>,
    permissions: Permissions,
    roles: Roles,
    decisions: Vec<Decision>,
}

mod impls;
