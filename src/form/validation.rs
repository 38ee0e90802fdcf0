pub const NAME_REQUIRED: &str = "Name field is required.";
pub const AGE_REQUIRED: &str = "Age field is required.";
pub const DESCRIPTION_REQUIRED: &str = "Description field is required.";

/// Per-field messages from the last validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub age: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.description.is_none()
    }
}

/// Check the required fields. Whitespace counts as content.
pub fn validate_required(name: &str, age: &str, description: &str) -> FieldErrors {
    FieldErrors {
        name: name.is_empty().then_some(NAME_REQUIRED),
        age: age.is_empty().then_some(AGE_REQUIRED),
        description: description.is_empty().then_some(DESCRIPTION_REQUIRED),
    }
}

/// Keep only ASCII digits.
pub fn sanitize_age(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_missing() {
        let errors = validate_required("", "", "");
        assert_eq!(
            errors,
            FieldErrors {
                name: Some(NAME_REQUIRED),
                age: Some(AGE_REQUIRED),
                description: Some(DESCRIPTION_REQUIRED),
            }
        );
        assert!(!errors.is_empty());
    }

    #[test]
    fn all_present() {
        assert!(validate_required("Rex", "3", "friendly").is_empty());
    }

    #[test]
    fn age_keeps_digits_only() {
        assert_eq!(sanitize_age("1a2-3"), "123");
        assert_eq!(sanitize_age("-4.5"), "45");
        assert_eq!(sanitize_age("abc"), "");
        assert_eq!(sanitize_age("٣"), "");
    }
}
