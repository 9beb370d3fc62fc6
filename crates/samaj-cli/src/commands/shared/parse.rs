use serde::de::DeserializeOwned;

/// Parse a wire enum value (`SCREAMING_SNAKE_CASE`) from loose user input
/// such as `pending` or `middle-class`, using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace(['-', ' '], "_").to_ascii_uppercase();
    let json = serde_json::Value::String(normalized);
    serde_json::from_value(json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use samaj_core::enums::{EconomicStatus, RequestStatus, VerificationStatus};

    use super::parse_enum;

    #[test]
    fn parses_lowercase_value() {
        let status: RequestStatus = parse_enum("approved", "status").expect("status should parse");
        assert_eq!(status, RequestStatus::Approved);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: EconomicStatus =
            parse_enum("middle-class", "economic status").expect("should parse");
        assert_eq!(status, EconomicStatus::MiddleClass);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<VerificationStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
