use serde::{Deserialize, Serialize};

/// Property details of a home quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeForm {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: String,
    pub year_built: String,
    pub square_footage: String,
    pub construction_type: String,
    pub roof_type: String,
    pub roof_age: String,
    pub number_of_stories: String,
    pub security_system: String,
}

/// Homeowner details of a home quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub marital_status: String,
    pub occupation: String,
    pub years_at_residence: String,
    pub prior_claims: String,
    pub current_insurer: String,
}

/// Requested coverage of a home quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverageForm {
    pub dwelling_coverage: String,
    pub personal_property: String,
    pub liability_limit: String,
    pub deductible: String,
    pub start_date: String,
}

/// The three groups of the home insurance form, persisted together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeFormData {
    pub home_form: HomeForm,
    pub owner_form: OwnerForm,
    pub coverage_form: CoverageForm,
}

impl HomeFormData {
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
