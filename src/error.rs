// ⚠️ Error Taxonomy
// Invalid input is the only way a calculation can fail: the core does no I/O.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RentError {
    /// Rejected before any computation starts
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl RentError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        RentError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            RentError::InvalidInput { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, RentError>;

/// Reject rent figures that are not strictly positive finite numbers
pub fn ensure_positive_rent(rent: f64) -> Result<f64> {
    if !rent.is_finite() {
        return Err(RentError::invalid("original_rent", "must be a finite number"));
    }
    if rent <= 0.0 {
        return Err(RentError::invalid(
            "original_rent",
            format!("must be greater than zero (got {})", rent),
        ));
    }
    Ok(rent)
}

/// Reject a computed rent that overflowed
pub fn ensure_finite_result(rent: f64) -> Result<f64> {
    if rent.is_finite() {
        Ok(rent)
    } else {
        Err(RentError::invalid(
            "original_rent",
            "too large: the computed rent is not a finite number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rent_accepted() {
        assert_eq!(ensure_positive_rent(100.0), Ok(100.0));
        assert_eq!(ensure_positive_rent(0.01), Ok(0.01));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(ensure_positive_rent(0.0).is_err());
        assert!(ensure_positive_rent(-5.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let err = ensure_positive_rent(f64::NAN).unwrap_err();
        assert_eq!(err.field(), "original_rent");
        assert!(ensure_positive_rent(f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowed_result_rejected() {
        assert_eq!(ensure_finite_result(1587.0), Ok(1587.0));
        let err = ensure_finite_result(f64::INFINITY).unwrap_err();
        assert_eq!(err.field(), "original_rent");
    }

    #[test]
    fn test_error_message() {
        let err = RentError::invalid("category", "unknown code `luxury`");
        assert_eq!(
            err.to_string(),
            "invalid input for `category`: unknown code `luxury`"
        );
    }
}
