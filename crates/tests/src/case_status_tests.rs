use pretty_assertions::assert_eq;
use shared_types::StepId;

use crate::common::{fill_step, spawn_backend};

#[tokio::test]
async fn status_update_round_trips() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    fill_step(&mut wizard.store, StepId::Applicant);
    wizard.save_and_advance().await.unwrap();
    let id = wizard.store.draft.case_id.clone().unwrap();

    let resp = wizard.update_status(&id, "Under Review").await.unwrap();
    assert_eq!(resp.id, id);
    assert_eq!(resp.status.as_deref(), Some("Under Review"));
    assert_eq!(backend.case_status(&id).as_deref(), Some("Under Review"));
    assert!(!wizard.store.ui.is_loading);
}

#[tokio::test]
async fn status_update_for_unknown_case_surfaces_the_error() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    let err = wizard.update_status("no-such-case", "Closed").await.unwrap_err();
    assert_eq!(err.message, "Case not found");
    assert_eq!(wizard.store.ui.error.as_deref(), Some("Case not found"));
    assert!(!wizard.store.ui.is_loading);
}
