use crate::utils::error::{GroupSumError, Result};

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
        return Err(GroupSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_digits(field_name: &str, value: &str) -> Result<()> {
    if let Some((position, c)) = value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        tracing::debug!("{} rejected: '{}' at {}", field_name, c, position);
        return Err(GroupSumError::ParseError {
            line: 1,
            token: c.to_string(),
            position,
        });
    }
    Ok(())
}
