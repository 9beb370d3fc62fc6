//! Family and member form validation.
//!
//! Enforces the two household invariants the backend expects from every
//! save: exactly one member carries `isMukhiya`, and no two members share a
//! non-empty Aadhaar number.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};

use super::rules::{is_blank, is_blank_opt, is_valid_aadhaar, is_valid_email, is_valid_mobile};
use super::{FieldErrors, member_key};
use crate::entities::{Family, Person};
use crate::enums::Relation;

const MAX_AGE: u32 = 120;

/// Validate a complete family form (family fields plus every member).
///
/// # Errors
///
/// Returns the collected [`FieldErrors`] when any field or household
/// invariant fails.
pub fn validate_family(family: &Family) -> Result<(), FieldErrors> {
    let today = Utc::now().date_naive();
    let mut errors = FieldErrors::new();

    if is_blank(&family.village_id) {
        errors.insert("villageId", "Village is required");
    }
    if is_blank(&family.mukhiya_name) {
        errors.insert("mukhiyaName", "Mukhiya name is required");
    }
    if is_blank(&family.current_address) {
        errors.insert("currentAddress", "Current address is required");
    }

    if family.members.is_empty() {
        errors.insert("members", "At least one family member is required");
        return errors.into_result();
    }

    for (index, member) in family.members.iter().enumerate() {
        check_member(member, today, &mut errors, |field| member_key(index, field));
    }

    let heads: Vec<usize> = family
        .members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_mukhiya)
        .map(|(index, _)| index)
        .collect();
    match heads.as_slice() {
        [] => errors.insert("mukhiya", "Select one member as mukhiya (head of family)"),
        [head] => {
            let member = &family.members[*head];
            if member.relation.is_some_and(|r| r != Relation::Head) {
                errors.insert(
                    member_key(*head, "relation"),
                    "The mukhiya's relation must be SELF",
                );
            }
        }
        _ => errors.insert("mukhiya", "Only one member can be the mukhiya"),
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, member) in family.members.iter().enumerate() {
        let Some(aadhaar) = member.normalized_aadhaar() else {
            continue;
        };
        if let Some(first) = seen.get(&aadhaar) {
            errors.insert(
                member_key(index, "aadhaarNumber"),
                format!("Aadhaar number already used by member {}", first + 1),
            );
        } else {
            seen.insert(aadhaar, index);
        }
    }

    errors.into_result()
}

/// Validate a single member being added to an existing family.
///
/// Keys are plain field names since the form edits one member.
///
/// # Errors
///
/// Returns [`FieldErrors`] for field failures, a second mukhiya, or an
/// Aadhaar number already held by another member.
pub fn validate_member_addition(existing: &[Person], member: &Person) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_member(member, Utc::now().date_naive(), &mut errors, str::to_string);
    check_against_household(existing.iter(), member, &mut errors);
    errors.into_result()
}

/// Validate an edit of one member against the rest of the household.
///
/// The member is matched to its stored version by `id`.
///
/// # Errors
///
/// Returns [`FieldErrors`] for field failures, a second mukhiya, a duplicate
/// Aadhaar number, or when the edit would leave the family without a mukhiya.
pub fn validate_member_update(existing: &[Person], member: &Person) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_member(member, Utc::now().date_naive(), &mut errors, str::to_string);

    let others = existing.iter().filter(|other| other.id != member.id);
    check_against_household(others.clone(), member, &mut errors);

    let was_mukhiya = existing
        .iter()
        .any(|other| other.id == member.id && other.is_mukhiya);
    if was_mukhiya && !member.is_mukhiya && !others.clone().any(|other| other.is_mukhiya) {
        errors.insert("isMukhiya", "A family must keep one mukhiya");
    }

    errors.into_result()
}

fn check_against_household<'a>(
    others: impl Iterator<Item = &'a Person> + Clone,
    member: &Person,
    errors: &mut FieldErrors,
) {
    if member.is_mukhiya && others.clone().any(|other| other.is_mukhiya) {
        errors.insert("isMukhiya", "This family already has a mukhiya");
    }
    if let Some(aadhaar) = member.normalized_aadhaar() {
        let clash = others
            .filter_map(Person::normalized_aadhaar)
            .any(|other| other == aadhaar);
        if clash {
            errors.insert(
                "aadhaarNumber",
                "Aadhaar number already used by another member",
            );
        }
    }
}

fn check_member(
    member: &Person,
    today: NaiveDate,
    errors: &mut FieldErrors,
    key: impl Fn(&str) -> String,
) {
    if is_blank(&member.first_name) {
        errors.insert(key("firstName"), "First name is required");
    }
    if is_blank(&member.last_name) {
        errors.insert(key("lastName"), "Last name is required");
    }
    if member.gender.is_none() {
        errors.insert(key("gender"), "Gender is required");
    }
    if member.relation.is_none() {
        errors.insert(key("relation"), "Relation to mukhiya is required");
    }

    match (member.age, member.date_of_birth) {
        (None, None) => errors.insert(key("age"), "Age or date of birth is required"),
        (Some(age), _) if age > MAX_AGE => {
            errors.insert(key("age"), format!("Age must be between 0 and {MAX_AGE}"));
        }
        _ => {}
    }
    if member.date_of_birth.is_some_and(|dob| dob > today) {
        errors.insert(key("dateOfBirth"), "Date of birth cannot be in the future");
    }

    match member.mobile.as_deref() {
        Some(mobile) if !is_blank(mobile) => {
            if !is_valid_mobile(mobile) {
                errors.insert(key("mobile"), "Enter a valid 10-digit mobile number");
            }
        }
        _ if member.is_mukhiya => errors.insert(key("mobile"), "Mukhiya's mobile number is required"),
        _ => {}
    }

    if !is_blank_opt(member.email.as_deref())
        && !member.email.as_deref().is_some_and(is_valid_email)
    {
        errors.insert(key("email"), "Enter a valid email address");
    }

    if !is_blank_opt(member.aadhaar_number.as_deref())
        && !member.aadhaar_number.as_deref().is_some_and(is_valid_aadhaar)
    {
        errors.insert(key("aadhaarNumber"), "Enter a valid 12-digit Aadhaar number");
    }
}
