use crate::ac::traits::{
    FormPermissionBackend,
    RoleBackend,
};

/// EnrichmentPlatform - the backing store for permission enrichment
///
/// This trait is applicable to everything that implements the relevant
/// backends that compose this trait, so that a single store may provide
/// both of the lookups.
pub trait EnrichmentPlatform: RoleBackend
    + FormPermissionBackend

    + Send
    + Sync
{
}

impl<P: RoleBackend
    + FormPermissionBackend

    + Send
    + Sync
> EnrichmentPlatform for P {}
