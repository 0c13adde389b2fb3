//! Client-side case-filing workflow for the legal-aid portal.
//!
//! The portal backend owns the durable draft; this crate owns the wizard:
//! an injectable [`store::DraftStore`] holding the in-progress form, a
//! step-gated validation layer, and a [`wizard::CaseFilingWizard`] that
//! coordinates per-step persistence, draft hydration, and final submission
//! over the REST API.

pub mod api;
pub mod config;
pub mod store;
pub mod validate;
pub mod wizard;

pub use api::{CaseApi, HttpCaseApi};
pub use config::ClientConfig;
pub use store::{CaseDraft, DraftStore, SaveStatus, WizardUi};
pub use wizard::{CaseFilingWizard, SubmitOutcome};
