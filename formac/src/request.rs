use formcore::ac::{
    actor::Who,
    policy::Policy,
    resource::Resource,
    result::EnrichmentResult,
    user::CurrentUser,
};
use formrbac::Enricher;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// A complete enrichment request, as assembled from the request context.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRequest {
    #[serde(default)]
    pub policy: Policy,
    pub who: Who,
    #[serde(default)]
    pub resource: Resource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
    #[serde(default)]
    pub api_user: bool,
}

impl EnrichmentRequest {
    pub async fn enrich_with(&self, enricher: &Enricher) -> EnrichmentResult {
        enricher.enrich(
            &self.policy,
            &self.who,
            &self.resource,
            self.current_user.as_ref(),
            self.api_user,
        ).await
    }
}

/// Fails with the permissions that were required but not granted.
pub fn check(result: &EnrichmentResult) -> Result<(), Error> {
    let missing = result.missing_permissions();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingPermissions {
            actor_id: result.actor_id().clone(),
            missing,
        })
    }
}
