use serde::{Deserialize, Serialize};

/// The seven wizard steps of the case-filing workflow, in filing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepId {
    Applicant,
    Victim,
    CaseDetails,
    Incident,
    LegalPreference,
    Explanation,
    Documents,
}

/// Static description of one wizard step.
///
/// `fields` lists every draft field the step owns (wire names); `required`
/// is the subset checked unconditionally by the validation gate. The two
/// lists feed both validation and payload extraction so they cannot drift.
pub struct StepSpec {
    pub id: StepId,
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
}

/// Step table. `ngoType` is owned by the Legal Preference step but only
/// required when `seekingNgoHelp` is answered "Yes" (conditional rule in
/// the validation gate).
pub const STEPS: &[StepSpec] = &[
    StepSpec {
        id: StepId::Applicant,
        title: "Applicant",
        fields: &["applicantName", "email", "mobile", "aadhaar"],
        required: &["applicantName", "email", "mobile", "aadhaar"],
    },
    StepSpec {
        id: StepId::Victim,
        title: "Victim",
        fields: &["victimName", "relation", "victimGender", "victimAge"],
        required: &["victimName", "relation", "victimGender", "victimAge"],
    },
    StepSpec {
        id: StepId::CaseDetails,
        title: "Case Details",
        fields: &["caseTitle", "caseType"],
        required: &["caseTitle", "caseType"],
    },
    StepSpec {
        id: StepId::Incident,
        title: "Incident",
        fields: &["incidentDate", "incidentPlace", "urgency"],
        required: &["incidentDate", "incidentPlace", "urgency"],
    },
    StepSpec {
        id: StepId::LegalPreference,
        title: "Legal Preference",
        fields: &["specialization", "courtType", "seekingNgoHelp", "ngoType"],
        required: &["specialization", "courtType", "seekingNgoHelp"],
    },
    StepSpec {
        id: StepId::Explanation,
        title: "Explanation",
        fields: &["background", "relief"],
        required: &["background", "relief"],
    },
    StepSpec {
        id: StepId::Documents,
        title: "Documents & Confirmation",
        fields: &["confirm"],
        required: &["confirm"],
    },
];

impl StepId {
    pub const COUNT: u8 = 7;

    /// Resolve a zero-based step index. Out-of-range indices are rejected.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(StepId::Applicant),
            1 => Some(StepId::Victim),
            2 => Some(StepId::CaseDetails),
            3 => Some(StepId::Incident),
            4 => Some(StepId::LegalPreference),
            5 => Some(StepId::Explanation),
            6 => Some(StepId::Documents),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            StepId::Applicant => 0,
            StepId::Victim => 1,
            StepId::CaseDetails => 2,
            StepId::Incident => 3,
            StepId::LegalPreference => 4,
            StepId::Explanation => 5,
            StepId::Documents => 6,
        }
    }

    pub fn spec(self) -> &'static StepSpec {
        &STEPS[self.index() as usize]
    }

    pub fn title(self) -> &'static str {
        self.spec().title
    }

    pub fn is_last(self) -> bool {
        self == StepId::Documents
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl Default for StepId {
    fn default() -> Self {
        StepId::Applicant
    }
}
