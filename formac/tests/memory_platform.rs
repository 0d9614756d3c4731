use formac::{
    EnrichmentRequest,
    MemoryPlatform,
    error::Error,
};
use formcore::ac::{
    Permission,
    Role,
    decision::Predicate,
};
use std::io::Write;

const STORE: &str = r#"{
    "user_roles": [
        {"user_id": "alice", "form_id": "form-1", "role": "owner"}
    ],
    "user_forms": [
        {"user_id": "alice", "form_id": "form-1", "permissions": ["form_read", "form_update"]}
    ],
    "submission_grants": [
        {"user_id": "alice", "submission_id": "s1", "permissions": ["form_read", "submission_read"]}
    ]
}"#;

fn store_file(content: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[tokio::test]
async fn user_request_from_store() -> anyhow::Result<()> {
    let file = store_file(STORE)?;
    let enricher = MemoryPlatform::from_path(file.path())?.into_enricher()?;
    let request: EnrichmentRequest = serde_json::from_str(r#"{
        "policy": {"requiredPermissions": ["form_read", "submission_read"]},
        "who": {"actor": {"type": "user", "id": "alice"}},
        "resource": {
            "form": {"id": "form-1"},
            "submission": {"submissionId": "s1"}
        },
        "currentUser": {"id": "alice"}
    }"#)?;
    let result = request.enrich_with(&enricher).await;

    assert!(result.roles().contains(Role::Owner));
    assert!(result.permissions().contains(Permission::FormRead));
    assert!(result.permissions().contains(Permission::FormUpdate));
    assert!(result.permissions().contains(Permission::SubmissionRead));
    assert_eq!(result.decision(Predicate::HasFormPermissions), Some(true));
    assert_eq!(result.decision(Predicate::HasSubmissionPermissions), Some(true));
    assert!(result.missing_permissions().is_empty());
    Ok(())
}

#[tokio::test]
async fn other_user_from_store() -> anyhow::Result<()> {
    let file = store_file(STORE)?;
    let enricher = MemoryPlatform::from_path(file.path())?.into_enricher()?;
    let request: EnrichmentRequest = serde_json::from_str(r#"{
        "policy": {"requiredPermissions": ["submission_read"]},
        "who": {"actor": {"type": "user", "id": "bob"}},
        "resource": {
            "form": {"id": "form-1"},
            "submission": {"submissionId": "s1"}
        },
        "currentUser": {"id": "bob"}
    }"#)?;
    let result = request.enrich_with(&enricher).await;

    assert!(result.roles().is_empty());
    assert!(result.permissions().is_empty());
    assert_eq!(result.decision(Predicate::HasFormPermissions), Some(false));
    assert_eq!(result.decision(Predicate::HasSubmissionPermissions), Some(false));
    assert!(result.missing_permissions().contains(Permission::SubmissionRead));
    Ok(())
}

#[tokio::test]
async fn unavailable_store() -> anyhow::Result<()> {
    let file = store_file(r#"{"unavailable": true}"#)?;
    let enricher = MemoryPlatform::from_path(file.path())?.into_enricher()?;
    let request: EnrichmentRequest = serde_json::from_str(r#"{
        "policy": {"requiredPermissions": ["form_read"]},
        "who": {"actor": {"type": "user", "id": "alice", "isAdmin": true}},
        "resource": {"form": {"id": "form-1"}},
        "currentUser": {"id": "alice"}
    }"#)?;
    let result = request.enrich_with(&enricher).await;

    // the admin flag still applies even though every lookup failed
    assert!(result.roles().contains(Role::Admin));
    assert!(result.permissions().is_empty());
    assert_eq!(result.decision(Predicate::ReadUserRole), Some(false));
    assert_eq!(result.decision(Predicate::HasFormPermissions), Some(false));
    Ok(())
}

#[test]
fn missing_store() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    assert!(matches!(
        MemoryPlatform::from_path(dir.path().join("missing.json")),
        Err(Error::Io(_)),
    ));
    Ok(())
}

#[test]
fn malformed_store() -> anyhow::Result<()> {
    let file = store_file("[]")?;
    assert!(matches!(
        MemoryPlatform::from_path(file.path()),
        Err(Error::Json(_)),
    ));
    Ok(())
}
