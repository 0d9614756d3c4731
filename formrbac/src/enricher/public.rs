use formcore::ac::{
    Permission,
    decision::Predicate,
    policy::Policy,
    resource::Resource,
    result::EnrichmentBuilder,
};
use serde_json::json;
use super::Enricher;

impl Enricher {
    /// Anonymous actors are never looked up.  Beyond the base access,
    /// only public forms grant anything more.
    pub(super) fn enrich_public(
        &self,
        builder: &mut EnrichmentBuilder,
        policy: &Policy,
        resource: &Resource,
    ) {
        builder.decide(Predicate::PublicUserDatabaseSkip, true);
        builder
            .grant_all(self.vocabulary.public_base_access.iter())
            .decide(Predicate::PublicUserBaseAccess, true);

        if !resource.is_public_form() {
            return;
        }

        // Reading back a submission is only allowed as a pure read; any
        // other combination of required permissions gains nothing.
        if policy.requires_only(Permission::SubmissionRead) {
            builder
                .grant(Permission::SubmissionRead)
                .decide(Predicate::PublicUserSubmissionRead, true);
        }

        if let Some(file) = &resource.file {
            let metadata = json!({ "fileId": file.id });
            if file.is_draft() {
                builder
                    .grant_all(policy.required_permissions.iter().copied())
                    .decide_with(Predicate::PublicUserDraftFileAccess, true, metadata);
            } else {
                builder.decide_with(
                    Predicate::PublicUserSubmittedFileAccess,
                    false,
                    metadata,
                );
            }
        }
    }
}
