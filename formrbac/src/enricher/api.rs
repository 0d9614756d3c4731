use formcore::ac::{
    Permission,
    actor::Actor,
    decision::Predicate,
    policy::{
        Classification,
        Policy,
        ResourceKind,
    },
    resource::Resource,
    result::EnrichmentBuilder,
};
use serde_json::json;
use super::Enricher;

impl Enricher {
    /// API actors are trusted clients; nothing is looked up for them.
    ///
    /// The file exceptions are chosen by the shape of the resource alone:
    /// a submitted file, a draft file, or no file at all for an upload.
    pub(super) fn enrich_api(
        &self,
        builder: &mut EnrichmentBuilder,
        policy: &Policy,
        actor: &Actor,
        resource: &Resource,
    ) {
        builder.decide(Predicate::ApiUserDatabaseSkip, true);
        builder
            .grant_all(self.vocabulary.api_full_access.iter())
            .decide(Predicate::ApiUserFullAccess, true);

        let webcomponents = policy.classification == Classification::Webcomponents;
        match &resource.file {
            Some(file) if !file.is_draft() => {
                let allowed = actor.metadata.files_api_access != Some(false);
                if allowed && policy.requires(Permission::SubmissionRead) {
                    builder.grant(Permission::SubmissionRead);
                }
                let metadata = json!({ "fileId": file.id });
                builder.decide_with(
                    Predicate::ApiUserFileAccess,
                    allowed,
                    metadata.clone(),
                );
                if webcomponents {
                    builder.decide_with(
                        Predicate::ApiUserFileApiAccess,
                        allowed,
                        metadata,
                    );
                }
            }
            Some(file) => {
                if !webcomponents {
                    return;
                }
                let metadata = json!({ "fileId": file.id });
                if policy.requires(Permission::SubmissionRead) {
                    builder
                        .grant(Permission::SubmissionRead)
                        .decide_with(
                            Predicate::ApiUserDraftFileRead,
                            true,
                            metadata.clone(),
                        );
                }
                if policy.requires(Permission::SubmissionUpdate) {
                    builder
                        .grant(Permission::SubmissionUpdate)
                        .decide_with(
                            Predicate::ApiUserDraftFileDelete,
                            true,
                            metadata,
                        );
                }
            }
            None => {
                if webcomponents
                    && policy.resource_spec.kind == ResourceKind::FileCreate
                {
                    builder.decide(Predicate::ApiUserFileCreate, true);
                }
            }
        }
    }
}
