use shared_types::{CaseDraftFields, CaseIdsResponse, DraftResponse, SaveStepResponse, StepId};
use std::fmt;

/// Persistent save-state indicator shown in the wizard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Submitting,
    Submitted,
    SaveFailed,
    SubmitFailed,
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveStatus::Idle => write!(f, ""),
            SaveStatus::Saving => write!(f, "Saving..."),
            SaveStatus::Saved => write!(f, "Saved!"),
            SaveStatus::Submitting => write!(f, "Submitting..."),
            SaveStatus::Submitted => write!(f, "Submitted!"),
            SaveStatus::SaveFailed => write!(f, "Error saving"),
            SaveStatus::SubmitFailed => write!(f, "Error"),
        }
    }
}

/// Client-only UI state describing the current draft. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardUi {
    pub is_loading: bool,
    pub save_status: SaveStatus,
    pub error: Option<String>,
}

/// The in-progress case: server-assigned identifiers, the step pointer,
/// and the form fields. `case_id` is `None` only before the first
/// successful step save; once set it never changes for this draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseDraft {
    pub case_id: Option<String>,
    pub case_number: Option<String>,
    pub step: StepId,
    pub fields: CaseDraftFields,
}

/// Single source of truth for the wizard.
///
/// A plain value, constructed per wizard instance (and per test) rather
/// than ambient global state. All mutation goes through the methods below;
/// the async outcomes in [`crate::wizard`] call exactly one reaction each.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    pub draft: CaseDraft,
    pub ui: WizardUi,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge partial field edits into the form. No validation here — the
    /// gate runs on "Next", not on keystrokes.
    pub fn update_fields(&mut self, patch: impl FnOnce(&mut CaseDraftFields)) {
        patch(&mut self.draft.fields);
    }

    /// Direct step-pointer override, used for "Back" navigation only.
    /// Never talks to the server.
    pub fn set_step(&mut self, step: StepId) {
        self.draft.step = step;
    }

    /// Clear everything back to a fresh draft: ids, step, fields, status.
    pub fn reset(&mut self) {
        self.draft = CaseDraft::default();
        self.ui = WizardUi::default();
    }

    /// Drop the header status line (after its short display delay).
    pub fn clear_save_status(&mut self) {
        self.ui.save_status = SaveStatus::Idle;
    }

    pub fn clear_error(&mut self) {
        self.ui.error = None;
    }

    // ── Async outcome reactions ─────────────────────────────────────

    pub(crate) fn begin_save(&mut self) {
        self.ui.is_loading = true;
        self.ui.save_status = SaveStatus::Saving;
    }

    /// Adopt the server-assigned identifiers and advance past the step the
    /// server just persisted.
    pub(crate) fn apply_save_success(&mut self, resp: &SaveStepResponse) {
        self.ui.is_loading = false;
        self.draft.case_id = Some(resp.case_id.clone());
        if resp.case_number.is_some() {
            self.draft.case_number = resp.case_number.clone();
        }
        let next = (resp.step + 1).min(StepId::COUNT - 1);
        self.draft.step = StepId::from_index(next).unwrap_or_default();
        self.ui.save_status = SaveStatus::Saved;
        self.ui.error = None;
    }

    /// The step pointer stays put; the user edits and retries.
    pub(crate) fn apply_save_failure(&mut self, message: String) {
        self.ui.is_loading = false;
        self.ui.save_status = SaveStatus::SaveFailed;
        self.ui.error = Some(message);
    }

    pub(crate) fn begin_submit(&mut self) {
        self.ui.is_loading = true;
        self.ui.save_status = SaveStatus::Submitting;
    }

    /// Successful finalization destroys the local draft so the wizard is
    /// immediately re-enterable for a new case.
    pub(crate) fn apply_submit_success(&mut self) {
        self.draft = CaseDraft::default();
        self.ui.is_loading = false;
        self.ui.save_status = SaveStatus::Submitted;
        self.ui.error = None;
    }

    /// The draft is preserved so the user may retry submission.
    pub(crate) fn apply_submit_failure(&mut self, message: String) {
        self.ui.is_loading = false;
        self.ui.save_status = SaveStatus::SubmitFailed;
        self.ui.error = Some(message);
    }

    pub(crate) fn begin_loading(&mut self) {
        self.ui.is_loading = true;
    }

    pub(crate) fn finish_loading(&mut self) {
        self.ui.is_loading = false;
    }

    /// Overwrite local state wholesale from a server draft, resuming at the
    /// step the server recorded. Out-of-range steps clamp to the last step.
    pub(crate) fn apply_hydrated(&mut self, draft: &DraftResponse) {
        self.ui.is_loading = false;
        self.draft.case_id = Some(draft.id.clone());
        self.draft.case_number = draft.case_number.clone();
        let step = draft.current_step.min(StepId::COUNT - 1);
        self.draft.step = StepId::from_index(step).unwrap_or_default();
        self.draft.fields = CaseDraftFields::from(draft);
        self.ui.error = None;
    }

    /// "Start new case": adopt the freshly created ids over empty fields.
    pub(crate) fn apply_new_case(&mut self, resp: &CaseIdsResponse) {
        self.draft = CaseDraft {
            case_id: Some(resp.case_id.clone()),
            case_number: resp.case_number.clone(),
            step: StepId::Applicant,
            fields: CaseDraftFields::default(),
        };
        self.ui.is_loading = false;
        self.ui.save_status = SaveStatus::Idle;
        self.ui.error = None;
    }
}
