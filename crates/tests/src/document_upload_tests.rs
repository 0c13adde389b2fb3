use pretty_assertions::assert_eq;
use shared_types::{PendingDocument, StepId, MAX_DOCUMENT_BYTES};

use crate::common::{advance_to_final_step, fill_step, spawn_backend};
use filing_client::SaveStatus;

fn pdf(name: &str, len: usize) -> PendingDocument {
    PendingDocument::new(name, "application/pdf", vec![0u8; len])
}

#[tokio::test]
async fn accepted_documents_upload_during_submission() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    advance_to_final_step(&mut wizard).await;
    let id = wizard.store.draft.case_id.clone().unwrap();
    fill_step(&mut wizard.store, StepId::Documents);
    wizard.store.update_fields(|f| {
        f.documents.push(pdf("fir-copy.pdf", 1024));
        f.documents
            .push(PendingDocument::new("photo.jpg", "image/jpeg", vec![1, 2, 3]));
    });

    let outcome = wizard.submit().await.unwrap();

    assert!(outcome.warnings.is_empty());
    assert_eq!(
        backend.case_documents(&id),
        vec!["fir-copy.pdf".to_string(), "photo.jpg".to_string()]
    );
    assert_eq!(backend.case_status(&id).as_deref(), Some("Submitted"));
}

#[tokio::test]
async fn oversized_and_wrong_type_files_become_warnings() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    advance_to_final_step(&mut wizard).await;
    let id = wizard.store.draft.case_id.clone().unwrap();
    fill_step(&mut wizard.store, StepId::Documents);
    wizard.store.update_fields(|f| {
        f.documents.push(pdf("huge-scan.pdf", MAX_DOCUMENT_BYTES + 1));
        f.documents
            .push(PendingDocument::new("notes.docx", "application/msword", vec![0; 10]));
        f.documents.push(pdf("fir-copy.pdf", 512));
    });

    let outcome = wizard.submit().await.unwrap();

    // The submission still goes through; the rejects are reported.
    assert_eq!(
        outcome.warnings,
        vec![
            "huge-scan.pdf: File size exceeds 2MB limit".to_string(),
            "notes.docx: Only PDF and image files allowed".to_string(),
        ]
    );
    assert_eq!(backend.case_documents(&id), vec!["fir-copy.pdf".to_string()]);
    assert_eq!(backend.case_status(&id).as_deref(), Some("Submitted"));
    assert_eq!(wizard.store.ui.save_status, SaveStatus::Submitted);
}

#[tokio::test]
async fn no_documents_means_no_upload_request() {
    let backend = spawn_backend().await;
    let mut wizard = backend.wizard();

    advance_to_final_step(&mut wizard).await;
    let id = wizard.store.draft.case_id.clone().unwrap();
    fill_step(&mut wizard.store, StepId::Documents);

    let outcome = wizard.submit().await.unwrap();
    assert!(outcome.warnings.is_empty());
    assert!(backend.case_documents(&id).is_empty());
}
