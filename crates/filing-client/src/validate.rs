use shared_types::{
    is_valid_aadhaar, is_valid_case_type, is_valid_court_type, is_valid_email, is_valid_gender,
    is_valid_incident_date, is_valid_mobile, is_valid_name, is_valid_ngo_type, is_valid_relation,
    is_valid_specialization, is_valid_urgency, is_valid_victim_age, AppError, CaseDraftFields,
    StepId, NGO_HELP_ANSWERS,
};
use std::collections::HashMap;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields.";
pub const CONFIRM_MESSAGE: &str = "Please confirm the information before submitting.";

/// Gate a "Next" (or submit) against the active step's field subset.
///
/// Rules run in a fixed order and the first failure wins — errors are never
/// aggregated. A failure here means no network call is made.
pub fn validate_step(step: StepId, fields: &CaseDraftFields) -> Result<(), AppError> {
    // Presence check for every required field of the step, table-driven.
    for name in step.spec().required {
        if *name == "confirm" {
            if !fields.confirm {
                return Err(AppError::invalid_field("confirm", CONFIRM_MESSAGE));
            }
            continue;
        }
        let present = fields.get(name).is_some_and(|v| !v.trim().is_empty());
        if !present {
            let mut field_errors = HashMap::new();
            field_errors.insert(name.to_string(), "This field is required.".to_string());
            return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE, field_errors));
        }
    }

    match step {
        StepId::Applicant => {
            if !is_valid_name(&fields.applicant_name) {
                return Err(AppError::invalid_field(
                    "applicantName",
                    "Name should contain only letters and spaces.",
                ));
            }
            if !is_valid_email(&fields.email) {
                return Err(AppError::invalid_field(
                    "email",
                    "Please enter a valid email address.",
                ));
            }
            if !is_valid_mobile(&fields.mobile) {
                return Err(AppError::invalid_field(
                    "mobile",
                    "Please enter a valid 10-digit mobile number.",
                ));
            }
            if !is_valid_aadhaar(&fields.aadhaar) {
                return Err(AppError::invalid_field(
                    "aadhaar",
                    "Aadhaar number must be exactly 12 digits.",
                ));
            }
        }
        StepId::Victim => {
            if !is_valid_name(&fields.victim_name) {
                return Err(AppError::invalid_field(
                    "victimName",
                    "Victim name should contain only letters and spaces.",
                ));
            }
            if !is_valid_relation(&fields.relation) {
                return Err(AppError::invalid_field(
                    "relation",
                    "Please select a valid relation.",
                ));
            }
            if !is_valid_gender(&fields.victim_gender) {
                return Err(AppError::invalid_field(
                    "victimGender",
                    "Please select a valid gender.",
                ));
            }
            if !is_valid_victim_age(&fields.victim_age) {
                return Err(AppError::invalid_field(
                    "victimAge",
                    "Age must be between 1 and 100.",
                ));
            }
        }
        StepId::CaseDetails => {
            if !is_valid_case_type(&fields.case_type) {
                return Err(AppError::invalid_field(
                    "caseType",
                    "Please select a valid case type.",
                ));
            }
        }
        StepId::Incident => {
            if !is_valid_incident_date(&fields.incident_date) {
                return Err(AppError::invalid_field(
                    "incidentDate",
                    "Incident date must be a valid date (YYYY-MM-DD).",
                ));
            }
            if !is_valid_urgency(&fields.urgency) {
                return Err(AppError::invalid_field(
                    "urgency",
                    "Please select a valid urgency level.",
                ));
            }
        }
        StepId::LegalPreference => {
            if !is_valid_specialization(&fields.specialization) {
                return Err(AppError::invalid_field(
                    "specialization",
                    "Please select a valid specialization.",
                ));
            }
            if !is_valid_court_type(&fields.court_type) {
                return Err(AppError::invalid_field(
                    "courtType",
                    "Please select a valid court type.",
                ));
            }
            if !NGO_HELP_ANSWERS.contains(&fields.seeking_ngo_help.as_str()) {
                return Err(AppError::invalid_field(
                    "seekingNgoHelp",
                    "Please answer whether you are seeking NGO help.",
                ));
            }
            // The NGO sub-type becomes required only when help is requested.
            if fields.seeking_ngo_help == "Yes" {
                if fields.ngo_type.trim().is_empty() {
                    return Err(AppError::invalid_field(
                        "ngoType",
                        "Please select type of NGO.",
                    ));
                }
                if !is_valid_ngo_type(&fields.ngo_type) {
                    return Err(AppError::invalid_field(
                        "ngoType",
                        "Please select a valid NGO type.",
                    ));
                }
            }
        }
        StepId::Explanation | StepId::Documents => {}
    }

    Ok(())
}
