use shared_types::{
    AppError, CaseIdsResponse, CaseStatusResponse, SaveStepRequest, SaveStepResponse, StepId,
};

use crate::api::CaseApi;
use crate::store::DraftStore;
use crate::validate::validate_step;

/// Result of a successful submission. `warnings` lists documents the server
/// rejected during the upload phase; their presence does not make the
/// submission a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub case_id: String,
    pub case_number: Option<String>,
    pub warnings: Vec<String>,
}

/// Coordinates the seven-step filing workflow against the portal backend.
///
/// Owns the [`DraftStore`] and issues at most one request at a time per
/// draft: callers are rejected while a request is outstanding, mirroring
/// the disabled "Next"/"Submit" controls in the UI.
pub struct CaseFilingWizard<A: CaseApi> {
    api: A,
    pub store: DraftStore,
}

impl<A: CaseApi> CaseFilingWizard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: DraftStore::new(),
        }
    }

    fn guard_idle(&self) -> Result<(), AppError> {
        if self.store.ui.is_loading {
            return Err(AppError::bad_request("A request is already in progress."));
        }
        Ok(())
    }

    /// One-shot draft fetch on workflow entry. A missing draft and a failed
    /// fetch both mean "start fresh" — first-time users have no draft, so
    /// neither outcome is surfaced as an error.
    pub async fn hydrate(&mut self) {
        self.store.begin_loading();
        match self.api.fetch_draft().await {
            Ok(Some(draft)) => {
                tracing::info!(case_id = %draft.id, step = draft.current_step, "resuming draft");
                self.store.apply_hydrated(&draft);
            }
            Ok(None) => self.store.finish_loading(),
            Err(e) => {
                tracing::debug!(error = %e, "draft fetch failed; starting fresh");
                self.store.finish_loading();
            }
        }
    }

    /// "Next": validate the active step, persist only its field subset, and
    /// advance on the server's acknowledgement. Validation failures abort
    /// before any network call; save failures leave the step unchanged.
    pub async fn save_and_advance(&mut self) -> Result<SaveStepResponse, AppError> {
        self.guard_idle()?;
        let step = self.store.draft.step;
        if step.is_last() {
            return Err(AppError::bad_request(
                "The final step is submitted, not saved.",
            ));
        }

        validate_step(step, &self.store.draft.fields)?;
        let data = self
            .store
            .draft
            .fields
            .step_data(step)
            .ok_or_else(|| AppError::internal("no payload for step"))?;

        let req = SaveStepRequest {
            step: step.index(),
            case_id: self.store.draft.case_id.clone(),
            data,
        };

        self.store.begin_save();
        tracing::info!(step = step.index(), case_id = ?req.case_id, "saving step");
        match self.api.save_step(&req).await {
            Ok(resp) => {
                self.store.apply_save_success(&resp);
                Ok(resp)
            }
            Err(e) => {
                tracing::warn!(step = step.index(), error = %e, "step save failed");
                self.store.apply_save_failure(e.message.clone());
                Err(e)
            }
        }
    }

    /// "Back": move one step earlier. Purely local, never a server call.
    pub fn back(&mut self) {
        if let Some(prev) = self.store.draft.step.prev() {
            self.store.set_step(prev);
        }
    }

    /// Two-phase finalization from the last step: upload any pending
    /// documents, then submit. Per-file upload rejections are carried as
    /// warnings on the success outcome; only the submit call itself decides
    /// success or failure.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        self.guard_idle()?;
        // Local confirmation gate; no server round-trip on failure.
        validate_step(StepId::Documents, &self.store.draft.fields)?;

        self.store.begin_submit();
        let case_id = self.store.draft.case_id.clone();

        let mut warnings = Vec::new();
        if let Some(id) = case_id.as_deref() {
            let documents = self.store.draft.fields.documents.clone();
            if !documents.is_empty() {
                tracing::info!(case_id = %id, files = documents.len(), "uploading documents");
                match self.api.upload_documents(id, &documents).await {
                    Ok(resp) => warnings = resp.errors,
                    Err(e) => {
                        tracing::warn!(case_id = %id, error = %e, "document upload failed");
                        self.store.apply_submit_failure(e.message.clone());
                        return Err(e);
                    }
                }
            }
        }

        match self.api.submit_case(case_id.as_deref()).await {
            Ok(resp) => {
                tracing::info!(case_id = %resp.case_id, warnings = warnings.len(), "case submitted");
                self.store.apply_submit_success();
                Ok(SubmitOutcome {
                    case_id: resp.case_id,
                    case_number: resp.case_number,
                    warnings,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission failed");
                self.store.apply_submit_failure(e.message.clone());
                Err(e)
            }
        }
    }

    /// Abandon the current draft and open a fresh server-side case record.
    pub async fn start_new_case(&mut self) -> Result<CaseIdsResponse, AppError> {
        self.guard_idle()?;
        self.store.begin_loading();
        match self.api.start_new_case().await {
            Ok(resp) => {
                tracing::info!(case_id = %resp.case_id, "started new case");
                self.store.apply_new_case(&resp);
                Ok(resp)
            }
            Err(e) => {
                self.store.finish_loading();
                self.store.ui.error = Some(e.message.clone());
                Err(e)
            }
        }
    }

    /// Passthrough to `PUT /api/cases/{caseId}/status`.
    pub async fn update_status(
        &mut self,
        case_id: &str,
        status: &str,
    ) -> Result<CaseStatusResponse, AppError> {
        self.guard_idle()?;
        self.store.begin_loading();
        let result = self.api.update_case_status(case_id, status).await;
        self.store.finish_loading();
        if let Err(e) = &result {
            self.store.ui.error = Some(e.message.clone());
        }
        result
    }
}
