use pretty_assertions::assert_eq;
use shared_types::StepId;

use crate::common::{fill_step, spawn_backend};
use filing_client::SaveStatus;

#[tokio::test]
async fn first_save_creates_a_case_and_advances() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    fill_step(&mut wizard.store, StepId::Applicant);
    let resp = wizard.save_and_advance().await.unwrap();

    assert_eq!(resp.step, 0);
    assert!(resp.case_number.is_some());
    assert_eq!(backend.case_count(), 1);
    assert_eq!(
        backend.case_field(&resp.case_id, "applicantName"),
        Some(serde_json::json!("John Doe"))
    );
    assert_eq!(wizard.store.draft.step, StepId::Victim);
    assert_eq!(wizard.store.draft.case_id, Some(resp.case_id));
    assert_eq!(wizard.store.ui.save_status, SaveStatus::Saved);
    assert!(!wizard.store.ui.is_loading);
}

#[tokio::test]
async fn later_saves_reuse_the_same_case() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    fill_step(&mut wizard.store, StepId::Applicant);
    wizard.save_and_advance().await.unwrap();
    let id = wizard.store.draft.case_id.clone().unwrap();

    fill_step(&mut wizard.store, StepId::Victim);
    let resp = wizard.save_and_advance().await.unwrap();

    assert_eq!(resp.case_id, id);
    assert_eq!(backend.case_count(), 1);
    assert_eq!(
        backend.case_field(&id, "victimName"),
        Some(serde_json::json!("Anjali Sharma"))
    );
    assert_eq!(wizard.store.draft.step, StepId::CaseDetails);
}

#[tokio::test]
async fn save_sends_only_the_active_steps_fields() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    // Fields for a later step are already present locally; they must not
    // leak into the applicant save.
    fill_step(&mut wizard.store, StepId::Applicant);
    fill_step(&mut wizard.store, StepId::Victim);
    wizard.save_and_advance().await.unwrap();
    let id = wizard.store.draft.case_id.clone().unwrap();

    assert_eq!(
        backend.case_field(&id, "applicantName"),
        Some(serde_json::json!("John Doe"))
    );
    assert_eq!(backend.case_field(&id, "victimName"), None);
}

#[tokio::test]
async fn invalid_fields_block_the_save_locally() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    fill_step(&mut wizard.store, StepId::Applicant);
    wizard.store.update_fields(|f| f.mobile = "12345".into());

    let err = wizard.save_and_advance().await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.message, "Please enter a valid 10-digit mobile number.");
    assert_eq!(backend.case_count(), 0);
    assert_eq!(wizard.store.draft.step, StepId::Applicant);
    assert_eq!(wizard.store.ui.save_status, SaveStatus::Idle);
}

#[tokio::test]
async fn unknown_case_id_fails_without_moving_the_step() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    wizard.store.draft.case_id = Some("no-such-case".into());
    fill_step(&mut wizard.store, StepId::Applicant);

    let err = wizard.save_and_advance().await.unwrap_err();
    assert_eq!(err.message, "Case not found");
    assert_eq!(wizard.store.draft.step, StepId::Applicant);
    assert_eq!(wizard.store.ui.save_status, SaveStatus::SaveFailed);
    assert_eq!(wizard.store.ui.error.as_deref(), Some("Case not found"));
    // The bad id is kept; the user can start a new case explicitly.
    assert_eq!(wizard.store.draft.case_id.as_deref(), Some("no-such-case"));
}

#[tokio::test]
async fn back_never_talks_to_the_server() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    fill_step(&mut wizard.store, StepId::Applicant);
    wizard.save_and_advance().await.unwrap();
    assert_eq!(wizard.store.draft.step, StepId::Victim);

    wizard.back();
    assert_eq!(wizard.store.draft.step, StepId::Applicant);
    // Local edits after "Back" stay local until the next save.
    wizard.store.update_fields(|f| f.applicant_name = "Jane Doe".into());
    let id = wizard.store.draft.case_id.clone().unwrap();
    assert_eq!(
        backend.case_field(&id, "applicantName"),
        Some(serde_json::json!("John Doe"))
    );
}
