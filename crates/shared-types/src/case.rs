use serde::{Deserialize, Serialize};

use crate::draft::StepData;

// ── Validation constants ────────────────────────────────────────────

/// Valid case type values offered by the filing form.
pub const CASE_TYPES: &[&str] = &["Civil", "Criminal", "Family", "Property", "Consumer"];

/// Valid urgency levels for an incident.
pub const URGENCY_LEVELS: &[&str] = &["Low", "Medium", "High"];

/// Valid applicant-to-victim relations.
pub const RELATIONS: &[&str] = &[
    "Self", "Father", "Mother", "Son", "Daughter", "Husband", "Wife", "Brother", "Sister",
    "Grandfather", "Grandmother", "Legal Guardian", "Relative", "Friend", "Other",
];

/// Valid victim gender values.
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Valid lawyer specializations.
pub const SPECIALIZATIONS: &[&str] = &["Criminal", "Civil", "Family", "Property"];

/// Valid court types.
pub const COURT_TYPES: &[&str] = &["District Court", "High Court", "Supreme Court"];

/// Valid NGO categories for third-party assistance.
pub const NGO_TYPES: &[&str] = &[
    "Legal Aid", "Women Rights", "Child Protection", "Senior Citizen Welfare", "Human Rights",
];

/// Valid answers to the "seeking help from NGO?" question.
pub const NGO_HELP_ANSWERS: &[&str] = &["Yes", "No"];

/// Per-file size cap enforced by the document-upload endpoint.
pub const MAX_DOCUMENT_BYTES: usize = 2 * 1024 * 1024;

/// Check whether a case type string is valid.
pub fn is_valid_case_type(s: &str) -> bool {
    CASE_TYPES.contains(&s)
}

/// Check whether an urgency level string is valid.
pub fn is_valid_urgency(s: &str) -> bool {
    URGENCY_LEVELS.contains(&s)
}

/// Check whether a relation string is valid.
pub fn is_valid_relation(s: &str) -> bool {
    RELATIONS.contains(&s)
}

/// Check whether a gender string is valid.
pub fn is_valid_gender(s: &str) -> bool {
    GENDERS.contains(&s)
}

/// Check whether a specialization string is valid.
pub fn is_valid_specialization(s: &str) -> bool {
    SPECIALIZATIONS.contains(&s)
}

/// Check whether a court type string is valid.
pub fn is_valid_court_type(s: &str) -> bool {
    COURT_TYPES.contains(&s)
}

/// Check whether an NGO type string is valid.
pub fn is_valid_ngo_type(s: &str) -> bool {
    NGO_TYPES.contains(&s)
}

/// Names may contain only letters and spaces, and at least one letter.
pub fn is_valid_name(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Mobile numbers are exactly 10 digits.
pub fn is_valid_mobile(s: &str) -> bool {
    s.len() == 10 && s.chars().all(|c| c.is_ascii_digit())
}

/// Aadhaar numbers are exactly 12 digits.
pub fn is_valid_aadhaar(s: &str) -> bool {
    s.len() == 12 && s.chars().all(|c| c.is_ascii_digit())
}

/// Incident dates are ISO `YYYY-MM-DD` calendar dates.
pub fn is_valid_incident_date(s: &str) -> bool {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Victim age must be a whole number between 1 and 100.
pub fn is_valid_victim_age(s: &str) -> bool {
    matches!(s.trim().parse::<u16>(), Ok(age) if (1..=100).contains(&age))
}

/// Email shape check (`local@domain.tld`), via the validator crate.
#[cfg(feature = "validation")]
pub fn is_valid_email(s: &str) -> bool {
    use validator::ValidateEmail;
    s.validate_email()
}

// ── Request types ───────────────────────────────────────────────────

/// Body of `POST /api/cases/save-step`: the step index, that step's field
/// subset flattened alongside it, and the case id once one is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStepRequest {
    pub step: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(flatten)]
    pub data: StepData,
}

/// Body of `POST /api/cases/submit`. With no `caseId` the backend falls
/// back to the caller's most recent open draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCaseRequest {
    #[serde(default)]
    pub case_id: Option<String>,
}

/// Body of `PUT /api/cases/{caseId}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCaseStatusRequest {
    pub status: String,
}

// ── Response types ──────────────────────────────────────────────────

/// Response of `POST /api/cases/save-step`: the server-assigned identifiers
/// and the step index it just persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStepResponse {
    pub case_id: String,
    #[serde(default)]
    pub case_number: Option<String>,
    pub step: u8,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/cases/submit` and `POST /api/cases/new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseIdsResponse {
    pub case_id: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/cases/upload-documents`. `errors` lists files the
/// server rejected; a non-empty list does not make the upload a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentsResponse {
    #[serde(default)]
    pub uploaded_urls: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Case shape returned by `PUT /api/cases/{caseId}/status`. Only the fields
/// the client reads are modeled; the backend sends more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStatusResponse {
    pub id: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Open draft returned by `GET /api/cases/draft`. Every form field is
/// optional: drafts persist only the steps saved so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub id: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub current_step: u8,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub aadhaar: Option<String>,
    #[serde(default)]
    pub victim_name: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub victim_gender: Option<String>,
    #[serde(default)]
    pub victim_age: Option<String>,
    #[serde(default)]
    pub case_title: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub incident_date: Option<String>,
    #[serde(default)]
    pub incident_place: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub court_type: Option<String>,
    #[serde(default)]
    pub seeking_ngo_help: Option<String>,
    #[serde(default)]
    pub ngo_type: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub relief: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
