use formcore::ac::{
    actor::Actor,
    decision::Predicate,
    grant::FormFilter,
    policy::Policy,
    resource::{
        FormRef,
        Resource,
        SubmissionRef,
    },
    result::EnrichmentBuilder,
    user::CurrentUser,
};
use serde_json::{
    Value,
    json,
};
use std::fmt::Display;
use super::Enricher;

fn failure(metadata: Value, error: impl Display) -> Value {
    let mut metadata = metadata;
    if let Value::Object(map) = &mut metadata {
        map.insert("error".to_string(), Value::String(error.to_string()));
    }
    metadata
}

impl Enricher {
    /// Authenticated users get their grants from the lookups, each one
    /// made only when the resource carries what it needs.  A failed
    /// lookup only withholds what that lookup would have given.
    pub(super) async fn enrich_user(
        &self,
        builder: &mut EnrichmentBuilder,
        policy: &Policy,
        actor: &Actor,
        resource: &Resource,
        current_user: Option<&CurrentUser>,
    ) {
        if actor.is_admin {
            builder.add_role(self.vocabulary.admin_role);
        }
        if let Some(form) = &resource.form {
            self.read_user_role(builder, actor, form).await;
            self.form_permissions(builder, form, current_user).await;
        }
        if let Some(submission) = &resource.submission {
            self.submission_permissions(builder, policy, submission, current_user).await;
        }
    }

    async fn read_user_role(
        &self,
        builder: &mut EnrichmentBuilder,
        actor: &Actor,
        form: &FormRef,
    ) {
        let metadata = json!({ "formId": form.id });
        let Some(user_id) = actor.id.as_deref() else {
            log::warn!("user actor without id; no roles read for form {}", form.id);
            builder.decide_with(
                Predicate::ReadUserRole,
                false,
                failure(metadata, "actor has no id"),
            );
            return;
        };
        match self.role_backend.read_user_role(user_id, &form.id).await {
            Ok(user_roles) => {
                builder.add_roles(user_roles.into_iter().map(|user_role| user_role.role));
            }
            Err(e) => {
                log::warn!("failed to read roles of {user_id} for form {}: {e}", form.id);
                builder.decide_with(Predicate::ReadUserRole, false, failure(metadata, e));
            }
        }
    }

    async fn form_permissions(
        &self,
        builder: &mut EnrichmentBuilder,
        form: &FormRef,
        current_user: Option<&CurrentUser>,
    ) {
        let metadata = json!({ "formId": form.id });
        let Some(current_user) = current_user else {
            log::warn!("no current user; form permissions for {} not looked up", form.id);
            builder.decide_with(
                Predicate::HasFormPermissions,
                false,
                failure(metadata, "no current user"),
            );
            return;
        };
        let filter = FormFilter::new(form.id.clone());
        match self.permission_backend.get_user_forms(current_user, &filter).await {
            Ok(user_forms) => match user_forms
                .into_iter()
                .find(|user_form| user_form.form_id == form.id)
            {
                Some(user_form) => {
                    builder
                        .grant_all(user_form.permissions)
                        .decide_with(Predicate::HasFormPermissions, true, metadata);
                }
                None => {
                    builder.decide_with(Predicate::HasFormPermissions, false, metadata);
                }
            },
            Err(e) => {
                log::warn!(
                    "failed to get forms of {} for form {}: {e}",
                    current_user.id,
                    form.id,
                );
                builder.decide_with(Predicate::HasFormPermissions, false, failure(metadata, e));
            }
        }
    }

    async fn submission_permissions(
        &self,
        builder: &mut EnrichmentBuilder,
        policy: &Policy,
        submission: &SubmissionRef,
        current_user: Option<&CurrentUser>,
    ) {
        let metadata = json!({ "submissionId": submission.submission_id });
        let Some(current_user) = current_user else {
            log::warn!(
                "no current user; submission permissions for {} not checked",
                submission.submission_id,
            );
            builder.decide_with(
                Predicate::HasSubmissionPermissions,
                false,
                failure(metadata, "no current user"),
            );
            return;
        };
        match self.permission_backend.check_submission_permission(
            current_user,
            &submission.submission_id,
            &policy.required_permissions,
        ).await {
            Ok(true) => {
                builder
                    .grant_all(policy.required_permissions.iter().copied())
                    .decide_with(Predicate::HasSubmissionPermissions, true, metadata);
            }
            Ok(false) => {
                builder.decide_with(Predicate::HasSubmissionPermissions, false, metadata);
            }
            Err(e) => {
                log::warn!(
                    "failed to check submission {} for {}: {e}",
                    submission.submission_id,
                    current_user.id,
                );
                builder.decide_with(
                    Predicate::HasSubmissionPermissions,
                    false,
                    failure(metadata, e),
                );
            }
        }
    }
}
