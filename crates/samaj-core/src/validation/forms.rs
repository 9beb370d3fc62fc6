//! Validation for the single-record administrative forms.

use chrono::Utc;

use super::FieldErrors;
use super::rules::{is_blank, is_blank_opt, is_valid_email, is_valid_mobile, is_valid_pincode};
use crate::entities::{ChandaEntry, Chokhla, PasswordChange, ProfileUpdate, Village};

const MIN_PASSWORD_LEN: usize = 8;

fn check_required(errors: &mut FieldErrors, key: &str, value: &str, label: &str) {
    if is_blank(value) {
        errors.insert(key, format!("{label} is required"));
    }
}

fn check_mobile(errors: &mut FieldErrors, key: &str, value: &str) {
    if is_blank(value) {
        errors.insert(key, "Mobile number is required");
    } else if !is_valid_mobile(value) {
        errors.insert(key, "Enter a valid 10-digit mobile number");
    }
}

fn check_optional_email(errors: &mut FieldErrors, key: &str, value: Option<&str>) {
    if !is_blank_opt(value) && !value.is_some_and(is_valid_email) {
        errors.insert(key, "Enter a valid email address");
    }
}

/// # Errors
///
/// Returns [`FieldErrors`] for missing location fields or a malformed pincode.
pub fn validate_village(village: &Village) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "name", &village.name, "Village name");
    check_required(&mut errors, "chokhlaId", &village.chokhla_id, "Chokhla");
    check_required(&mut errors, "state", &village.state, "State");
    check_required(&mut errors, "district", &village.district, "District");
    if is_blank(&village.pincode) {
        errors.insert("pincode", "Pincode is required");
    } else if !is_valid_pincode(&village.pincode) {
        errors.insert("pincode", "Enter a valid 6-digit pincode");
    }
    errors.into_result()
}

/// # Errors
///
/// Returns [`FieldErrors`] for missing fields or malformed contact details.
pub fn validate_chokhla(chokhla: &Chokhla) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "name", &chokhla.name, "Chokhla name");
    check_required(&mut errors, "adhyakshName", &chokhla.adhyaksh_name, "Adhyaksh name");
    check_required(&mut errors, "state", &chokhla.state, "State");
    check_required(&mut errors, "district", &chokhla.district, "District");
    check_mobile(&mut errors, "mobile", &chokhla.mobile);
    check_optional_email(&mut errors, "email", chokhla.email.as_deref());
    errors.into_result()
}

/// # Errors
///
/// Returns [`FieldErrors`] for a missing name or malformed contact details.
pub fn validate_profile(profile: &ProfileUpdate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "name", &profile.name, "Name");
    check_mobile(&mut errors, "mobile", &profile.mobile);
    check_optional_email(&mut errors, "email", profile.email.as_deref());
    errors.into_result()
}

/// Login form: mobile number and password.
///
/// # Errors
///
/// Returns [`FieldErrors`] when either field is missing or the mobile number
/// is malformed.
pub fn validate_credentials(mobile: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_mobile(&mut errors, "mobile", mobile);
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result()
}

/// # Errors
///
/// Returns [`FieldErrors`] when the new password is too short or unchanged.
pub fn validate_password_change(change: &PasswordChange) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if change.current_password.is_empty() {
        errors.insert("currentPassword", "Current password is required");
    }
    if change.new_password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "newPassword",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    } else if change.new_password == change.current_password {
        errors.insert("newPassword", "New password must differ from the current one");
    }
    errors.into_result()
}

/// # Errors
///
/// Returns [`FieldErrors`] for a missing family/village, a zero amount, or a
/// payment date in the future.
pub fn validate_chanda_entry(entry: &ChandaEntry) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "familyId", &entry.family_id, "Family");
    check_required(&mut errors, "villageId", &entry.village_id, "Village");
    if entry.amount == 0 {
        errors.insert("amount", "Amount must be greater than zero");
    }
    if entry
        .paid_on
        .is_some_and(|paid_on| paid_on > Utc::now().date_naive())
    {
        errors.insert("paidOn", "Payment date cannot be in the future");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn village() -> Village {
        Village {
            name: "Rampura".into(),
            chokhla_id: "chk-1".into(),
            state: "Rajasthan".into(),
            district: "Jaipur".into(),
            pincode: "302001".into(),
            ..Village::default()
        }
    }

    #[test]
    fn village_requires_location() {
        assert!(validate_village(&village()).is_ok());

        let missing = Village {
            district: " ".into(),
            pincode: "0123".into(),
            ..village()
        };
        let errors = validate_village(&missing).unwrap_err();
        assert_eq!(errors.get("district"), Some("District is required"));
        assert_eq!(errors.get("pincode"), Some("Enter a valid 6-digit pincode"));
    }

    #[test]
    fn chokhla_checks_contact() {
        let chokhla = Chokhla {
            name: "Jaipur Chokhla".into(),
            adhyaksh_name: "Shankar Lal".into(),
            state: "Rajasthan".into(),
            district: "Jaipur".into(),
            mobile: "98290".into(),
            email: Some("chokhla@".into()),
            ..Chokhla::default()
        };
        let errors = validate_chokhla(&chokhla).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("mobile"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn profile_allows_missing_email() {
        let profile = ProfileUpdate {
            name: "Kailash".into(),
            mobile: "9414012345".into(),
            email: None,
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn credentials_require_both_fields() {
        let errors = validate_credentials("", "").unwrap_err();
        assert_eq!(errors.get("mobile"), Some("Mobile number is required"));
        assert!(errors.contains("password"));
        assert!(validate_credentials("9414012345", "secret").is_ok());
    }

    #[test]
    fn password_change_rules() {
        let short = PasswordChange {
            current_password: "old-password".into(),
            new_password: "short".into(),
        };
        assert!(validate_password_change(&short).unwrap_err().contains("newPassword"));

        let same = PasswordChange {
            current_password: "same-password".into(),
            new_password: "same-password".into(),
        };
        assert_eq!(
            validate_password_change(&same).unwrap_err().get("newPassword"),
            Some("New password must differ from the current one")
        );
    }

    #[test]
    fn chanda_entry_needs_positive_amount() {
        let entry = ChandaEntry {
            family_id: "fam-1".into(),
            village_id: "vil-1".into(),
            amount: 0,
            ..ChandaEntry::default()
        };
        assert!(validate_chanda_entry(&entry).unwrap_err().contains("amount"));

        let paid = ChandaEntry { amount: 1100, ..entry };
        assert!(validate_chanda_entry(&paid).is_ok());
    }
}
