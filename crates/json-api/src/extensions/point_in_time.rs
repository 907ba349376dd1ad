//! Catalog `?at=` query parsing.

use jiff::Timestamp;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Resolve the optional `at` query parameter used by the catalog listings.
///
/// Absent means "now"; products soft-deleted before `at` are hidden.
pub(crate) trait PointInTimeExt {
    fn into_point_in_time(self) -> Result<Timestamp, StatusError>;
}

impl PointInTimeExt for QueryParam<String, false> {
    fn into_point_in_time(self) -> Result<Timestamp, StatusError> {
        parse_point_in_time(self.into_inner())
    }
}

fn parse_point_in_time(value: Option<String>) -> Result<Timestamp, StatusError> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse::<Timestamp>())
        .transpose()
        .or_400("could not parse \"at\" query parameter")
        .map(|point_in_time| point_in_time.unwrap_or_else(Timestamp::now))
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn explicit_timestamp_is_used() -> TestResult {
        let expected: Timestamp = "2026-02-21T12:00:00Z".parse()?;

        let parsed = parse_point_in_time(Some("2026-02-21T12:00:00Z".to_string()))?;

        assert_eq!(parsed, expected);

        Ok(())
    }

    #[test]
    fn missing_or_blank_means_now() -> TestResult {
        let before = Timestamp::now();

        let missing = parse_point_in_time(None)?;
        let blank = parse_point_in_time(Some("  ".to_string()))?;

        assert!(missing >= before, "missing `at` resolves to now");
        assert!(blank >= before, "blank `at` resolves to now");

        Ok(())
    }

    #[test]
    fn malformed_timestamp_is_a_400() {
        let result = parse_point_in_time(Some("yesterday".to_string()));

        assert!(
            matches!(&result, Err(error) if error.code == StatusCode::BAD_REQUEST),
            "expected 400, got {result:?}"
        );
    }
}
