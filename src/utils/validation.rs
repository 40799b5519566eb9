use crate::utils::error::{Result, TrackerError};
use std::num::{IntErrorKind, ParseIntError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TrackerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

// Form field checks. These report `InvalidInput` rather than a config error.

pub fn require_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TrackerError::invalid_input(field_name, "value cannot be empty"));
    }
    Ok(())
}

pub fn require_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(TrackerError::invalid_input(
            field_name,
            format!("{} is not a real number", value),
        ));
    }
    Ok(())
}

/// Parses a latitude or longitude typed into a form.
pub fn parse_coordinate(field_name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::invalid_input(field_name, format!("'{}' is not a number", raw)))?;
    require_finite(field_name, value)?;
    Ok(value)
}

/// Parses a quantity typed into a form. Zero and negative values are rejected.
pub fn parse_quantity(field_name: &str, raw: &str) -> Result<i64> {
    let value: i64 = raw.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => TrackerError::invalid_input(
            field_name,
            format!("'{}' is too large (maximum {})", raw, i64::MAX),
        ),
        IntErrorKind::NegOverflow => TrackerError::invalid_input(
            field_name,
            format!("quantity must be positive, got {}", raw.trim()),
        ),
        _ => TrackerError::invalid_input(field_name, format!("'{}' is not an integer", raw)),
    })?;
    require_positive_quantity(field_name, value)?;
    Ok(value)
}

pub fn require_positive_quantity(field_name: &str, value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(TrackerError::invalid_input(
            field_name,
            format!("quantity must be positive, got {}", value),
        ));
    }
    Ok(value.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("lat", "10.5").unwrap(), 10.5);
        assert_eq!(parse_coordinate("lon", " -20 ").unwrap(), -20.0);
        assert!(parse_coordinate("lat", "").is_err());
        assert!(parse_coordinate("lat", "north").is_err());
        assert!(parse_coordinate("lat", "NaN").is_err());
        assert!(parse_coordinate("lat", "inf").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", "5").unwrap(), 5);
        assert!(parse_quantity("quantity", "0").is_err());
        assert!(parse_quantity("quantity", "-5").is_err());
        assert!(parse_quantity("quantity", "five").is_err());
        assert!(parse_quantity("quantity", "2.5").is_err());
    }

    #[test]
    fn test_oversized_quantity_reports_too_large() {
        assert_eq!(
            parse_quantity("quantity", "9223372036854775807").unwrap(),
            i64::MAX
        );

        let err = parse_quantity("quantity", "99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
        assert!(!err.to_string().contains("not an integer"));

        let err = parse_quantity("quantity", "-99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "Alpha").is_ok());
        assert!(matches!(
            require_non_empty("name", ""),
            Err(TrackerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("map.default_zoom", 5u8, 0, 22).is_ok());
        assert!(validate_range("map.default_zoom", 23u8, 0, 22).is_err());
    }
}
