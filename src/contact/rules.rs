use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::errors::FieldValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn error_slot_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }

    pub fn rule(self) -> &'static ValidationRule {
        match self {
            Field::Name => &NAME_RULE,
            Field::Email => &EMAIL_RULE,
            Field::Message => &MESSAGE_RULE,
        }
    }
}

pub struct ValidationRule {
    pub pattern: Lazy<Regex>,
    pub required: bool,
    pub error_text: &'static str,
}

static NAME_RULE: ValidationRule = ValidationRule {
    pattern: Lazy::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").expect("name pattern")),
    required: true,
    error_text: "Name should be 2-50 letters only",
};

static EMAIL_RULE: ValidationRule = ValidationRule {
    pattern: Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")),
    required: true,
    error_text: "Please enter a valid email address",
};

// (?s) lets multi-line messages count every character
static MESSAGE_RULE: ValidationRule = ValidationRule {
    pattern: Lazy::new(|| Regex::new(r"(?s)^.{10,500}$").expect("message pattern")),
    required: true,
    error_text: "Message should be at least 10 characters",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Passed,
    /// Required field left empty. Not submittable, but never shown as an error.
    Blank,
    Failed(FieldValidationError),
}

impl FieldCheck {
    pub fn passed(&self) -> bool {
        matches!(self, FieldCheck::Passed)
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&FieldValidationError> {
        match self {
            FieldCheck::Failed(err) => Some(err),
            _ => None,
        }
    }
}

pub fn check(field: Field, raw: &str) -> FieldCheck {
    let rule = field.rule();
    let value = raw.trim();

    if value.is_empty() && rule.required {
        return FieldCheck::Blank;
    }

    if rule.pattern.is_match(value) {
        FieldCheck::Passed
    } else {
        FieldCheck::Failed(FieldValidationError {
            field,
            reason: rule.error_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::Name, "Jo")]
    #[case(Field::Name, "Jane Goodall")]
    #[case(Field::Name, "  David Attenborough  ")]
    #[case(Field::Email, "keeper@zoorld.com")]
    #[case(Field::Email, "first.last+tag@mail.example.org")]
    #[case(Field::Message, "Ten chars!")]
    #[case(Field::Message, "When do the lions get fed?\nWe are visiting on Sunday.")]
    fn accepts_well_formed_values(#[case] field: Field, #[case] value: &str) {
        assert_eq!(check(field, value), FieldCheck::Passed);
    }

    #[rstest]
    #[case(Field::Name, "A1", "Name should be 2-50 letters only")]
    #[case(Field::Name, "A", "Name should be 2-50 letters only")]
    #[case(Field::Name, "O'Brien", "Name should be 2-50 letters only")]
    #[case(Field::Email, "not-an-email", "Please enter a valid email address")]
    #[case(Field::Email, "keeper@zoorld", "Please enter a valid email address")]
    #[case(Field::Email, "kee per@zoorld.com", "Please enter a valid email address")]
    #[case(Field::Email, "a@b@c.com", "Please enter a valid email address")]
    #[case(Field::Message, "short", "Message should be at least 10 characters")]
    fn rejects_with_configured_text(#[case] field: Field, #[case] value: &str, #[case] text: &str) {
        let result = check(field, value);
        let err = result.error().expect("expected a failure");
        assert_eq!(err.field, field);
        assert_eq!(err.to_string(), text);
    }

    #[test]
    fn name_length_is_bounded() {
        assert!(check(Field::Name, &"a".repeat(50)).passed());
        assert!(!check(Field::Name, &"a".repeat(51)).passed());
    }

    #[test]
    fn overlong_message_uses_message_text() {
        let result = check(Field::Message, &"x".repeat(501));
        assert_eq!(
            result.error().map(|e| e.reason),
            Some("Message should be at least 10 characters")
        );
        assert!(check(Field::Message, &"x".repeat(500)).passed());
    }

    #[rstest]
    #[case(Field::Name)]
    #[case(Field::Email)]
    #[case(Field::Message)]
    fn blank_values_are_neutral(#[case] field: Field) {
        assert_eq!(check(field, ""), FieldCheck::Blank);
        assert_eq!(check(field, "   \t"), FieldCheck::Blank);
    }

    #[test]
    fn ids_line_up_with_markup() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| (f.id(), f.error_slot_id())).collect();
        assert_eq!(
            ids,
            vec![("name", "nameError"), ("email", "emailError"), ("message", "messageError")]
        );
    }
}
