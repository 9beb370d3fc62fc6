//! Dashboard analytics over member lists.
//!
//! The backend supplies raw counts; breakdowns shown on the chokhla and
//! village dashboards are computed client-side from the member records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChandaRecord, Person};
use crate::enums::Gender;

/// Age brackets used on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Youth,
    Adult,
    Senior,
}

impl AgeGroup {
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=17 => Self::Child,
            18..=35 => Self::Youth,
            36..=60 => Self::Adult,
            _ => Self::Senior,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "0-17",
            Self::Youth => "18-35",
            Self::Adult => "36-60",
            Self::Senior => "61+",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenderSplit {
    pub male: u32,
    pub female: u32,
    pub other: u32,
    pub unspecified: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DigitalAccess {
    pub smartphone: u32,
    pub internet: u32,
    pub bank_account: u32,
    pub digitally_literate: u32,
}

/// Demographic summary of a set of members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemberSummary {
    pub total_members: u32,
    pub mukhiyas: u32,
    pub gender: GenderSplit,
    /// Keyed by [`AgeGroup::label`]; members without age or birth date are
    /// counted under `unknown`.
    pub age_groups: BTreeMap<String, u32>,
    /// Keyed by education level wire name; `unspecified` when absent.
    pub education: BTreeMap<String, u32>,
    pub digital: DigitalAccess,
    pub with_health_insurance: u32,
    pub with_disability: u32,
}

/// Summarize `members` as of `today`.
#[must_use]
pub fn summarize_members(members: &[Person], today: NaiveDate) -> MemberSummary {
    let mut summary = MemberSummary::default();

    for member in members {
        summary.total_members += 1;
        if member.is_mukhiya {
            summary.mukhiyas += 1;
        }

        match member.gender {
            Some(Gender::Male) => summary.gender.male += 1,
            Some(Gender::Female) => summary.gender.female += 1,
            Some(Gender::Other) => summary.gender.other += 1,
            None => summary.gender.unspecified += 1,
        }

        let age_key = member
            .age_on(today)
            .map_or("unknown", |age| AgeGroup::from_age(age).label());
        *summary.age_groups.entry(age_key.to_string()).or_default() += 1;

        let education_key = member.education.map_or("unspecified", |e| e.as_str());
        *summary.education.entry(education_key.to_string()).or_default() += 1;

        summary.digital.smartphone += u32::from(member.has_smartphone);
        summary.digital.internet += u32::from(member.has_internet);
        summary.digital.bank_account += u32::from(member.has_bank_account);
        summary.digital.digitally_literate += u32::from(member.digital_literacy);
        summary.with_health_insurance += u32::from(member.has_health_insurance);
        summary.with_disability += u32::from(member.has_disability);
    }

    summary
}

/// Share of chanda collected, in percent (0-100). Zero when nothing is due.
#[must_use]
pub fn collection_rate(record: &ChandaRecord) -> f64 {
    let due = record.total_amount + record.pending_amount;
    if due == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rate = record.total_amount as f64 / due as f64 * 100.0;
    rate
}

/// Sum chanda totals across villages.
#[must_use]
pub fn total_chanda(records: &[ChandaRecord]) -> ChandaRecord {
    records.iter().fold(
        ChandaRecord {
            village_name: "All villages".into(),
            ..ChandaRecord::default()
        },
        |mut acc, record| {
            acc.total_amount += record.total_amount;
            acc.pending_amount += record.pending_amount;
            acc.total_families += record.total_families;
            acc.paid_families += record.paid_families;
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::EducationLevel;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn age_labels_do_not_overlap() {
        assert_eq!(AgeGroup::from_age(60).label(), "36-60");
        assert_eq!(AgeGroup::from_age(61).label(), "61+");
        assert_eq!(AgeGroup::from_age(17).label(), "0-17");
        assert_eq!(AgeGroup::from_age(18).label(), "18-35");
    }

    #[test]
    fn summarizes_demographics() {
        let members = vec![
            Person {
                is_mukhiya: true,
                gender: Some(Gender::Male),
                age: Some(52),
                education: Some(EducationLevel::Graduate),
                has_smartphone: true,
                has_bank_account: true,
                ..Person::default()
            },
            Person {
                gender: Some(Gender::Female),
                date_of_birth: NaiveDate::from_ymd_opt(2010, 5, 1),
                has_internet: true,
                ..Person::default()
            },
            Person::default(),
        ];

        let summary = summarize_members(&members, today());
        assert_eq!(summary.total_members, 3);
        assert_eq!(summary.mukhiyas, 1);
        assert_eq!(
            summary.gender,
            GenderSplit {
                male: 1,
                female: 1,
                other: 0,
                unspecified: 1
            }
        );
        assert_eq!(summary.age_groups.get("36-60"), Some(&1));
        assert_eq!(summary.age_groups.get("0-17"), Some(&1));
        assert_eq!(summary.age_groups.get("unknown"), Some(&1));
        assert_eq!(summary.education.get("GRADUATE"), Some(&1));
        assert_eq!(summary.education.get("unspecified"), Some(&2));
        assert_eq!(summary.digital.smartphone, 1);
        assert_eq!(summary.digital.internet, 1);
    }

    #[test]
    fn age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(17), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::Youth);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(61), AgeGroup::Senior);
    }

    #[test]
    fn collection_rate_handles_zero_due() {
        assert!(collection_rate(&ChandaRecord::default()).abs() < f64::EPSILON);

        let record = ChandaRecord {
            total_amount: 7500,
            pending_amount: 2500,
            ..ChandaRecord::default()
        };
        assert!((collection_rate(&record) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn totals_add_up() {
        let records = vec![
            ChandaRecord {
                total_amount: 100,
                pending_amount: 50,
                total_families: 4,
                paid_families: 2,
                ..ChandaRecord::default()
            },
            ChandaRecord {
                total_amount: 200,
                pending_amount: 0,
                total_families: 3,
                paid_families: 3,
                ..ChandaRecord::default()
            },
        ];
        let total = total_chanda(&records);
        assert_eq!(total.total_amount, 300);
        assert_eq!(total.pending_amount, 50);
        assert_eq!(total.unpaid_families(), 2);
    }
}
