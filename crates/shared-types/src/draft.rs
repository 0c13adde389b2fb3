use serde::{Deserialize, Serialize};

use crate::case::DraftResponse;
use crate::steps::StepId;

/// A file selected for upload but not yet sent to the documents endpoint.
/// Held client-side only; never part of a step-save payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDocument {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PendingDocument {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// The full case-filing form, flat across all seven steps.
///
/// Everything is kept as entered (strings); validation is step-gated, not
/// applied on edit. `documents` and `confirm` never leave the client in a
/// step save — documents go through the upload endpoint and `confirm` is a
/// local submission gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseDraftFields {
    pub applicant_name: String,
    pub email: String,
    pub mobile: String,
    pub aadhaar: String,
    pub victim_name: String,
    pub relation: String,
    pub victim_gender: String,
    pub victim_age: String,
    pub case_title: String,
    pub case_type: String,
    pub incident_date: String,
    pub incident_place: String,
    pub urgency: String,
    pub specialization: String,
    pub court_type: String,
    pub seeking_ngo_help: String,
    pub ngo_type: String,
    pub background: String,
    pub relief: String,
    pub documents: Vec<PendingDocument>,
    pub confirm: bool,
}

/// One step's field subset, as sent to the save-step endpoint. Flattened
/// into [`crate::SaveStepRequest`], so only the active step's fields ever
/// cross the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepData {
    #[serde(rename_all = "camelCase")]
    Applicant {
        applicant_name: String,
        email: String,
        mobile: String,
        aadhaar: String,
    },
    #[serde(rename_all = "camelCase")]
    Victim {
        victim_name: String,
        relation: String,
        victim_gender: String,
        victim_age: String,
    },
    #[serde(rename_all = "camelCase")]
    CaseDetails {
        case_title: String,
        case_type: String,
    },
    #[serde(rename_all = "camelCase")]
    Incident {
        incident_date: String,
        incident_place: String,
        urgency: String,
    },
    #[serde(rename_all = "camelCase")]
    LegalPreference {
        specialization: String,
        court_type: String,
        seeking_ngo_help: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ngo_type: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Explanation {
        background: String,
        relief: String,
    },
}

impl CaseDraftFields {
    /// Extract the wire payload for one step. Returns `None` for the final
    /// step — Documents & Confirmation is finalized, never step-saved.
    pub fn step_data(&self, step: StepId) -> Option<StepData> {
        match step {
            StepId::Applicant => Some(StepData::Applicant {
                applicant_name: self.applicant_name.clone(),
                email: self.email.clone(),
                mobile: self.mobile.clone(),
                aadhaar: self.aadhaar.clone(),
            }),
            StepId::Victim => Some(StepData::Victim {
                victim_name: self.victim_name.clone(),
                relation: self.relation.clone(),
                victim_gender: self.victim_gender.clone(),
                victim_age: self.victim_age.clone(),
            }),
            StepId::CaseDetails => Some(StepData::CaseDetails {
                case_title: self.case_title.clone(),
                case_type: self.case_type.clone(),
            }),
            StepId::Incident => Some(StepData::Incident {
                incident_date: self.incident_date.clone(),
                incident_place: self.incident_place.clone(),
                urgency: self.urgency.clone(),
            }),
            StepId::LegalPreference => Some(StepData::LegalPreference {
                specialization: self.specialization.clone(),
                court_type: self.court_type.clone(),
                seeking_ngo_help: self.seeking_ngo_help.clone(),
                ngo_type: if self.ngo_type.is_empty() {
                    None
                } else {
                    Some(self.ngo_type.clone())
                },
            }),
            StepId::Explanation => Some(StepData::Explanation {
                background: self.background.clone(),
                relief: self.relief.clone(),
            }),
            StepId::Documents => None,
        }
    }

    /// Look up the current value of a field by its wire name. Backs the
    /// table-driven presence checks in the validation gate.
    pub fn get(&self, wire_name: &str) -> Option<&str> {
        let value = match wire_name {
            "applicantName" => &self.applicant_name,
            "email" => &self.email,
            "mobile" => &self.mobile,
            "aadhaar" => &self.aadhaar,
            "victimName" => &self.victim_name,
            "relation" => &self.relation,
            "victimGender" => &self.victim_gender,
            "victimAge" => &self.victim_age,
            "caseTitle" => &self.case_title,
            "caseType" => &self.case_type,
            "incidentDate" => &self.incident_date,
            "incidentPlace" => &self.incident_place,
            "urgency" => &self.urgency,
            "specialization" => &self.specialization,
            "courtType" => &self.court_type,
            "seekingNgoHelp" => &self.seeking_ngo_help,
            "ngoType" => &self.ngo_type,
            "background" => &self.background,
            "relief" => &self.relief,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl From<&DraftResponse> for CaseDraftFields {
    /// Rebuild the form from a server draft, defaulting every absent field.
    /// Pending documents and the confirmation flag always start cleared.
    fn from(d: &DraftResponse) -> Self {
        fn or_empty(v: &Option<String>) -> String {
            v.clone().unwrap_or_default()
        }
        Self {
            applicant_name: or_empty(&d.applicant_name),
            email: or_empty(&d.email),
            mobile: or_empty(&d.mobile),
            aadhaar: or_empty(&d.aadhaar),
            victim_name: or_empty(&d.victim_name),
            relation: or_empty(&d.relation),
            victim_gender: or_empty(&d.victim_gender),
            victim_age: or_empty(&d.victim_age),
            case_title: or_empty(&d.case_title),
            case_type: or_empty(&d.case_type),
            incident_date: or_empty(&d.incident_date),
            incident_place: or_empty(&d.incident_place),
            urgency: or_empty(&d.urgency),
            specialization: or_empty(&d.specialization),
            court_type: or_empty(&d.court_type),
            seeking_ngo_help: or_empty(&d.seeking_ngo_help),
            ngo_type: or_empty(&d.ngo_type),
            background: or_empty(&d.background),
            relief: or_empty(&d.relief),
            documents: Vec::new(),
            confirm: false,
        }
    }
}
