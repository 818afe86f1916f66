/// Validate a required text field (whitespace-only counts as empty).
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Both password entries must be identical.
pub fn validate_passwords_match(password: &str, confirm: &str) -> Option<String> {
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// True when every value is present after trimming.
pub fn all_present(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(validate_required("   ", "Name"), Some("Name is required".to_string()));
        assert_eq!(validate_required("Ann", "Name"), None);
    }

    #[test]
    fn passwords_must_match_exactly() {
        assert!(validate_passwords_match("abc", "abc").is_none());
        assert!(validate_passwords_match("abc", "abc ").is_some());
    }

    #[test]
    fn all_present_checks_each_value() {
        assert!(all_present(&["a", "b"]));
        assert!(!all_present(&["a", ""]));
    }
}
