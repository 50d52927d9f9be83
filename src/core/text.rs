use crate::domain::model::CaseMode;

/// Uppercases unless the caller explicitly asked for lowercase.
pub fn format_string(input: &str, mode: CaseMode) -> String {
    tracing::debug!("Formatting {} chars with mode {}", input.chars().count(), mode);
    match mode {
        CaseMode::ForceUpper | CaseMode::Default => input.to_uppercase(),
        CaseMode::ForceLower => input.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_string_modes() {
        assert_eq!(format_string("Hello", CaseMode::ForceUpper), "HELLO");
        assert_eq!(format_string("Hello", CaseMode::ForceLower), "hello");
        assert_eq!(format_string("Hello", CaseMode::Default), "HELLO");
    }

    #[test]
    fn test_format_string_from_optional_flag() {
        for s in ["", "mIxEd 123", "straße", "ÉCOLE"] {
            assert_eq!(format_string(s, Some(true).into()), s.to_uppercase());
            assert_eq!(format_string(s, Some(false).into()), s.to_lowercase());
            assert_eq!(format_string(s, None::<bool>.into()), s.to_uppercase());
        }
    }
}
