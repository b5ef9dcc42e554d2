//! Field rules shared by the sign-in and sign-up forms.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Validation messages keyed by field. Only the first message per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn add(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Owned message for rendering.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// Email shape check: a local part that neither starts with nor doubles a dot,
/// and a dotted domain ending in a letters-only TLD.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

/// Length in characters, not bytes.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "m@example.com",
            "first.last@mail.example.ir",
            "o'brien+tag@Example.COM",
            "a_b-c@sub-domain.co",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@example",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a@-example.com",
            "a@example.c0m",
            "a b@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn min_length_counts_characters() {
        // Eight Persian letters take sixteen bytes.
        assert!(has_min_length("سلامسلام", 8));
        assert!(!has_min_length("سلامسلا", 8));
        assert!(has_min_length("12345678", 8));
        assert!(!has_min_length("1234567", 8));
    }

    #[test]
    fn first_message_wins() {
        let mut errors = FieldErrors::default();
        errors.add(Field::ConfirmPassword, "first");
        errors.add(Field::ConfirmPassword, "second");
        assert_eq!(errors.get(Field::ConfirmPassword), Some("first"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), None);
    }
}
