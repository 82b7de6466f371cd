use crate::utils::error::{DeskError, Result};
use chrono::NaiveDate;

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::Validation {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_minimum(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(DeskError::Validation {
            message: format!("{} must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_date_range(check_in: NaiveDate, check_out: NaiveDate) -> Result<()> {
    if check_out <= check_in {
        return Err(DeskError::Validation {
            message: format!("check_out ({}) must be after check_in ({})", check_out, check_in),
        });
    }
    Ok(())
}
