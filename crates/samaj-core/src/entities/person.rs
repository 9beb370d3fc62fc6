use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EducationLevel, EmploymentStatus, Gender, MaritalStatus, Relation};

/// A family member with demographic, economic, health, and digital-access
/// attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub family_id: String,
    pub first_name: String,
    pub last_name: String,
    pub father_name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    pub relation: Option<Relation>,
    pub marital_status: Option<MaritalStatus>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub aadhaar_number: Option<String>,
    pub is_mukhiya: bool,

    // education and work
    pub education: Option<EducationLevel>,
    pub occupation: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    /// Monthly income in rupees.
    pub monthly_income: Option<u64>,

    // health
    pub blood_group: Option<String>,
    pub has_health_insurance: bool,
    pub has_disability: bool,
    pub chronic_disease: Option<String>,

    // digital access
    pub has_smartphone: bool,
    pub has_internet: bool,
    pub has_bank_account: bool,
    pub digital_literacy: bool,

    pub current_address: Option<String>,
}

impl Person {
    /// Aadhaar digits with separators removed; `None` when blank.
    #[must_use]
    pub fn normalized_aadhaar(&self) -> Option<String> {
        let digits: String = self
            .aadhaar_number
            .as_deref()?
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        (!digits.is_empty()).then_some(digits)
    }

    /// Age as recorded, or derived from the date of birth at `today`.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.age
            .or_else(|| self.date_of_birth.and_then(|dob| today.years_since(dob)))
    }
}
