use formcore::ac::{
    actor::{
        ActorId,
        ActorKind,
        Who,
    },
    policy::Policy,
    resource::Resource,
    result::{
        EnrichmentBuilder,
        EnrichmentResult,
    },
    traits::{
        FormPermissionBackend,
        RoleBackend,
    },
    user::CurrentUser,
};
use std::sync::Arc;
use crate::Vocabulary;
use super::Enricher;

impl Enricher {
    pub(crate) fn new(
        role_backend: Arc<dyn RoleBackend>,
        permission_backend: Arc<dyn FormPermissionBackend>,
        vocabulary: Vocabulary,
    ) -> Self {
        Self {
            role_backend,
            permission_backend,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Enrich the request made by `who` against the `resource` under
    /// the `policy`.
    ///
    /// `api_user` marks requests authenticated as an API client (which
    /// includes tokens issued by the gateway), and takes precedence over
    /// the type of the actor.  `current_user` is the session user, only
    /// consulted for authenticated users.
    ///
    /// This never fails; whatever could not be established is simply
    /// absent from the result.
    pub async fn enrich(
        &self,
        policy: &Policy,
        who: &Who,
        resource: &Resource,
        current_user: Option<&CurrentUser>,
        api_user: bool,
    ) -> EnrichmentResult {
        let actor = &who.actor;
        let mut builder = EnrichmentBuilder::new(
            ActorId::from(actor),
            policy.required_permissions.clone(),
        );
        let branch = match (api_user, &actor.kind) {
            (true, _) => {
                self.enrich_api(&mut builder, policy, actor, resource);
                "api"
            }
            (false, ActorKind::Public) => {
                self.enrich_public(&mut builder, policy, resource);
                "public"
            }
            (false, ActorKind::User) => {
                self.enrich_user(
                    &mut builder,
                    policy,
                    actor,
                    resource,
                    current_user,
                ).await;
                "user"
            }
            // an api typed actor without api authentication is not trusted
            (false, ActorKind::Api) | (false, ActorKind::Other(_)) => "none",
        };
        let result = builder.finish();
        log::info!(
            "enriched {} ({branch}): permissions={} roles={:?} decisions={}",
            result.actor_id(),
            result.permissions(),
            result.roles(),
            result.decisions().len(),
        );
        result
    }
}
