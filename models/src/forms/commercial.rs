use serde::{Deserialize, Serialize};

/// Commercial insurance intake form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CommercialFormData {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub business_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub business_type: String,
    pub years_in_business: String,
    pub number_of_employees: String,
    pub annual_revenue: String,
    pub industry: String,
    pub website: String,
    pub current_insurer: String,
    pub policy_expiration_date: String,
    pub claims_history: String,
    pub coverage_type: Vec<String>,
    pub additional_info: String,
}

impl CommercialFormData {
    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
