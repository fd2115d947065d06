use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::gateway::validate_email_format;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_SUBJECT_LEN: usize = 5;
pub const MIN_MESSAGE_LEN: usize = 20;
pub const MAX_MESSAGE_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Used for the input's `id` and `name` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Per-field messages, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns whether an error was removed.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Length as the length rules see it: trimmed, in characters rather than
/// bytes or UTF-16 units, so "😀" counts once.
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Checks every field; each field reports its first failing rule.
pub fn validate(input: &ContactFormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let name = trimmed_len(&input.name);
    if name == 0 {
        errors.insert(Field::Name, "Name is required");
    } else if name < MIN_NAME_LEN {
        errors.insert(Field::Name, "Name must be at least 2 characters");
    }

    if input.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !validate_email_format(&input.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    let subject = trimmed_len(&input.subject);
    if subject == 0 {
        errors.insert(Field::Subject, "Subject is required");
    } else if subject < MIN_SUBJECT_LEN {
        errors.insert(Field::Subject, "Subject must be at least 5 characters");
    }

    let message = trimmed_len(&input.message);
    if message == 0 {
        errors.insert(Field::Message, "Message is required");
    } else if message < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, "Message must be at least 20 characters");
    } else if message > MAX_MESSAGE_LEN {
        errors.insert(Field::Message, "Message must be less than 1000 characters");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            subject: "Hello there".to_string(),
            message: "x".repeat(25),
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn test_each_missing_field_reported_independently() {
        for field in Field::ALL {
            let mut input = valid_input();
            input.set(field, String::new());
            let errors = validate(&input);
            assert_eq!(errors.len(), 1, "only {:?} should fail", field);
            assert!(errors.get(field).is_some_and(|m| m.ends_with("is required")));
        }
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        input.email = " \t".to_string();
        let errors = validate(&input);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_message_length_boundaries() {
        let cases = [(19, false), (20, true), (1000, true), (1001, false)];
        for (len, ok) in cases {
            let mut input = valid_input();
            input.message = "m".repeat(len);
            assert_eq!(
                !validate(&input).contains(Field::Message),
                ok,
                "message of length {len}"
            );
        }
    }

    #[test]
    fn test_lengths_use_trimmed_characters() {
        let mut input = valid_input();
        input.name = " A ".to_string();
        assert_eq!(
            validate(&input).get(Field::Name),
            Some("Name must be at least 2 characters")
        );

        // multi-byte characters count once each
        input.name = "Zoë".to_string();
        input.subject = "Ünïcø".to_string();
        input.message = format!("  {}  ", "é".repeat(20));
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn test_astral_characters_count_once() {
        let mut input = valid_input();
        // 20 characters, 40 UTF-16 units
        input.message = "😀".repeat(20);
        assert!(!validate(&input).contains(Field::Message));

        input.message = "😀".repeat(19);
        assert_eq!(
            validate(&input).get(Field::Message),
            Some("Message must be at least 20 characters")
        );

        // 600 characters, 1200 UTF-16 units
        input.message = "😀".repeat(600);
        assert!(!validate(&input).contains(Field::Message));
        assert_eq!(trimmed_len(&input.message), 600);
    }

    #[test]
    fn test_trimmed_len_matches_validation() {
        let padded = format!("{}{}", " ".repeat(50), "m".repeat(MAX_MESSAGE_LEN));
        assert_eq!(padded.chars().count(), MAX_MESSAGE_LEN + 50);
        assert_eq!(trimmed_len(&padded), MAX_MESSAGE_LEN);

        let mut input = valid_input();
        input.message = padded;
        assert!(!validate(&input).contains(Field::Message));
    }

    #[test]
    fn test_all_invalid_fields_reported() {
        let input = ContactFormInput {
            name: String::new(),
            email: "bad".to_string(),
            subject: "hi".to_string(),
            message: "short".to_string(),
        };
        let errors = validate(&input);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(
            errors.get(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.get(Field::Subject),
            Some("Subject must be at least 5 characters")
        );
        assert_eq!(
            errors.get(Field::Message),
            Some("Message must be at least 20 characters")
        );
        let order = errors.iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(order, Field::ALL.to_vec());
    }

    #[test]
    fn test_input_accessors() {
        let mut input = ContactFormInput::default();
        assert!(input.is_empty());
        input.set(Field::Subject, "Hi".to_string());
        assert_eq!(input.get(Field::Subject), "Hi");
        assert!(!input.is_empty());
        assert_eq!(Field::Subject.key(), "subject");
    }
}
