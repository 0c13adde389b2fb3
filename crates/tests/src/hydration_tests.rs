use pretty_assertions::assert_eq;
use shared_types::StepId;

use crate::common::{fill_step, spawn_backend};
use filing_client::{CaseFilingWizard, HttpCaseApi};

#[tokio::test]
async fn no_draft_means_a_fresh_form() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    wizard.hydrate().await;

    assert_eq!(wizard.store.draft.case_id, None);
    assert_eq!(wizard.store.draft.step, StepId::Applicant);
    assert!(!wizard.store.ui.is_loading);
    assert_eq!(wizard.store.ui.error, None);
}

#[tokio::test]
async fn an_open_draft_resumes_where_it_left_off() {
    let backend = spawn_backend().await;

    // First session: fill and save the first three steps.
    let mut first = backend.wizard();
    for step in [StepId::Applicant, StepId::Victim, StepId::CaseDetails] {
        fill_step(&mut first.store, step);
        first.save_and_advance().await.unwrap();
    }
    let id = first.store.draft.case_id.clone().unwrap();

    // Second session: a brand-new wizard picks the draft up.
    let mut second = backend.wizard();
    second.hydrate().await;

    assert_eq!(second.store.draft.case_id.as_deref(), Some(id.as_str()));
    assert_eq!(second.store.draft.step, StepId::Incident);
    assert_eq!(second.store.draft.fields.applicant_name, "John Doe");
    assert_eq!(second.store.draft.fields.case_title, "Land possession dispute");
    // Unsaved concerns never come back from the server.
    assert!(second.store.draft.fields.documents.is_empty());
    assert!(!second.store.draft.fields.confirm);
}

#[tokio::test]
async fn hydration_overwrites_local_edits_wholesale() {
    let backend = spawn_backend().await;
    backend.seed_draft(1, &[("applicantName", "Saved Name")]);

    let mut wizard = backend.wizard();
    wizard.store.update_fields(|f| {
        f.applicant_name = "Unsaved Local Name".into();
        f.email = "unsaved@example.com".into();
    });
    wizard.hydrate().await;

    assert_eq!(wizard.store.draft.fields.applicant_name, "Saved Name");
    // Fields absent from the server draft reset to empty, not kept.
    assert_eq!(wizard.store.draft.fields.email, "");
    assert_eq!(wizard.store.draft.step, StepId::Victim);
}

#[tokio::test]
async fn out_of_range_saved_step_clamps_to_the_last_step() {
    let backend = spawn_backend().await;
    backend.seed_draft(9, &[]);

    let mut wizard = backend.wizard();
    wizard.hydrate().await;
    assert_eq!(wizard.store.draft.step, StepId::Documents);
}

#[tokio::test]
async fn unreachable_backend_is_not_fatal() {
    // A port nothing listens on; the request fails at the transport level.
    let config = filing_client::ClientConfig::new("http://127.0.0.1:9")
        .with_timeout(std::time::Duration::from_millis(300));
    let api = HttpCaseApi::new(&config).unwrap();
    let mut wizard = CaseFilingWizard::new(api);

    wizard.hydrate().await;

    assert_eq!(wizard.store.draft.case_id, None);
    assert_eq!(wizard.store.draft.step, StepId::Applicant);
    assert!(!wizard.store.ui.is_loading);
    assert_eq!(wizard.store.ui.error, None);
}
