use thiserror::Error;

/// Errors raised by the estimation model and its typed inputs.
///
/// Both variants are configuration or input errors. The model is
/// deterministic, so retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// A label or table entry that does not exist in a closed option set.
    #[error("unknown {kind}: {key:?}")]
    UnknownKey { kind: &'static str, key: String },
    /// A numeric input outside its declared domain.
    #[error("{field} out of domain: {value} ({expected})")]
    DomainViolation {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl EstimationError {
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    pub fn domain(field: &'static str, value: f64, expected: &'static str) -> Self {
        Self::DomainViolation {
            field,
            value,
            expected,
        }
    }
}

/// Checks that `value` is a finite percentage in [0, 100].
pub fn check_percent(field: &'static str, value: f64) -> Result<f64, EstimationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(EstimationError::domain(field, value, "expected 0..=100"))
    }
}

/// Checks that `value` is finite and not negative.
pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimationError::domain(field, value, "expected a finite value >= 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_percent_bounds() {
        assert_eq!(check_percent("x", 0.0), Ok(0.0));
        assert_eq!(check_percent("x", 100.0), Ok(100.0));
        assert!(check_percent("x", -0.1).is_err());
        assert!(check_percent("x", 100.5).is_err());
        assert!(check_percent("x", f64::NAN).is_err());
        assert!(check_percent("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative("budget", 0.0).is_ok());
        assert!(check_non_negative("budget", 1e9).is_ok());
        assert!(check_non_negative("budget", -1.0).is_err());
        assert!(check_non_negative("budget", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let e = EstimationError::unknown_key("climate scenario", "Oslo");
        assert_eq!(e.to_string(), "unknown climate scenario: \"Oslo\"");

        let e = check_percent("heating_system", 120.0).unwrap_err();
        assert_eq!(
            e.to_string(),
            "heating_system out of domain: 120 (expected 0..=100)"
        );
    }
}
