use crate::utils::error::{Result, TipError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TipError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_minimum<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(TipError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TipError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("tip_percent", 15u8, 0, 100).is_ok());
        assert!(validate_range("tip_percent", 0u8, 0, 100).is_ok());
        assert!(validate_range("tip_percent", 100u8, 0, 100).is_ok());
        assert!(validate_range("tip_percent", 101u8, 0, 100).is_err());
    }

    #[test]
    fn test_validate_minimum() {
        assert!(validate_minimum("split_count", 1u32, 1).is_ok());
        assert!(validate_minimum("split_count", 7u32, 1).is_ok());
        assert!(validate_minimum("split_count", 0u32, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency", "$").is_ok());
        assert!(validate_non_empty_string("currency", "").is_err());
        assert!(validate_non_empty_string("currency", "   ").is_err());
    }
}
