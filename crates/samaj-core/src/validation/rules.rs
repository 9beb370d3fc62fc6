//! Field-level format checks shared by every form.

/// `true` when the value is missing or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Same as [`is_blank`] for optional fields.
#[must_use]
pub fn is_blank_opt(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}

fn digits_only(value: &str) -> Option<String> {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    digits.chars().all(|c| c.is_ascii_digit()).then_some(digits)
}

/// Indian mobile number: 10 digits starting with 6-9, optional `+91` prefix.
#[must_use]
pub fn is_valid_mobile(value: &str) -> bool {
    let trimmed = value.trim();
    let local = trimmed.strip_prefix("+91").unwrap_or(trimmed);
    digits_only(local).is_some_and(|d| d.len() == 10 && matches!(d.as_bytes()[0], b'6'..=b'9'))
}

/// Aadhaar number: 12 digits, first digit 2-9. Spaces and hyphens are
/// accepted as group separators.
#[must_use]
pub fn is_valid_aadhaar(value: &str) -> bool {
    digits_only(value).is_some_and(|d| d.len() == 12 && matches!(d.as_bytes()[0], b'2'..=b'9'))
}

/// Indian postal pincode: 6 digits, first digit not zero.
#[must_use]
pub fn is_valid_pincode(value: &str) -> bool {
    let value = value.trim();
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit()) && !value.starts_with('0')
}

/// Loose email shape check: `local@domain.tld`, no whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_numbers() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("+91 98765 43210"));
        assert!(!is_valid_mobile("1234567890"));
        assert!(!is_valid_mobile("98765"));
        assert!(!is_valid_mobile("98765abcde"));
    }

    #[test]
    fn aadhaar_numbers() {
        assert!(is_valid_aadhaar("2345 6789 0123"));
        assert!(is_valid_aadhaar("234567890123"));
        assert!(!is_valid_aadhaar("134567890123"));
        assert!(!is_valid_aadhaar("23456789012"));
        assert!(!is_valid_aadhaar("2345678901ab"));
    }

    #[test]
    fn pincodes() {
        assert!(is_valid_pincode("302001"));
        assert!(!is_valid_pincode("002001"));
        assert!(!is_valid_pincode("30200"));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("sachiv@panchalsamaj.org"));
        assert!(!is_valid_email("sachiv@localhost"));
        assert!(!is_valid_email("@panchalsamaj.org"));
        assert!(!is_valid_email("a b@c.org"));
        assert!(!is_valid_email("a@b@c.org"));
    }

    #[test]
    fn blank_values() {
        assert!(is_blank("   "));
        assert!(is_blank_opt(None));
        assert!(is_blank_opt(Some("")));
        assert!(!is_blank_opt(Some("x")));
    }
}
