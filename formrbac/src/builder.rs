use formcore::{
    ac::traits::{
        FormPermissionBackend,
        RoleBackend,
    },
    platform::EnrichmentPlatform,
};
use std::sync::Arc;
use crate::{
    Enricher,
    Vocabulary,
    error::Error,
};

/// Builds an [`Enricher`].
///
/// Methods can be chained in order to set the configuration values.
/// Both the role backend and the permission backend must be provided,
/// either individually or together through [`Builder::platform`]; the
/// standard [`Vocabulary`] is used unless another is set.
#[derive(Clone, Default)]
pub struct Builder {
    role_backend: Option<Arc<dyn RoleBackend>>,
    permission_backend: Option<Arc<dyn FormPermissionBackend>>,
    vocabulary: Option<Vocabulary>,
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn role_backend(mut self, val: impl RoleBackend + 'static) -> Self {
        self.role_backend = Some(Arc::new(val));
        self
    }

    pub fn permission_backend(
        mut self,
        val: impl FormPermissionBackend + 'static,
    ) -> Self {
        self.permission_backend = Some(Arc::new(val));
        self
    }

    /// Use the one platform for both of the lookups.
    pub fn platform(mut self, val: impl EnrichmentPlatform + 'static) -> Self {
        let platform = Arc::new(val);
        self.role_backend = Some(platform.clone());
        self.permission_backend = Some(platform);
        self
    }

    pub fn vocabulary(mut self, val: Vocabulary) -> Self {
        self.vocabulary = Some(val);
        self
    }

    pub fn build(&self) -> Result<Enricher, Error> {
        log::trace!("building an Enricher");
        Ok(Enricher::new(
            self.role_backend
                .clone()
                .ok_or(Error::MissingRoleBackend)?,
            self.permission_backend
                .clone()
                .ok_or(Error::MissingPermissionBackend)?,
            self.vocabulary
                .clone()
                .unwrap_or_default(),
        ))
    }
}
