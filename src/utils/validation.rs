use crate::utils::error::{DrillError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Returns the lowercased extension of `file` once it is known to be allowed.
pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<String> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    let extension = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        })?;

    if !allowed_set.contains(extension.as_str()) {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        });
    }

    Ok(extension)
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
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
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
