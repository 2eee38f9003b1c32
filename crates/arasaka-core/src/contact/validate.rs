use std::sync::LazyLock;

use regex::Regex;

use super::form::{ContactForm, Field, FieldErrors};

/// Minimum message length, counted in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Simple `local@domain.tld` check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check every required field. An empty result means the form is valid.
///
/// Phone is optional and never checked.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if form.subject.trim().is_empty() {
        errors.insert(Field::Subject, "Subject is required".to_string());
    }

    if form.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required".to_string());
    } else if form.message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            Field::Message,
            format!("Message must be at least {MIN_MESSAGE_CHARS} characters"),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_missing_name_and_short_message() {
        let errors = validate(&form("", "a@b.com", "x", "short"));
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Name, Field::Message]
        );
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Message], "Message must be at least 10 characters");
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&form("V", "v@night.city", "Gig", "Ten chars!")).is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate(&form("   ", " ", "\t", "          "));
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Subject], "Subject is required");
        assert_eq!(errors[&Field::Message], "Message is required");
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
        assert!(!is_valid_email("a@@c.com"));

        let errors = validate(&form("V", "not-an-email", "x", "long enough message"));
        assert_eq!(errors[&Field::Email], "Invalid email format");
    }

    #[test]
    fn test_message_length_counts_characters() {
        assert!(validate(&form("V", "a@b.com", "x", "ネオンの街の夜は長い")).is_empty());
        assert!(validate(&form("V", "a@b.com", "x", "ネオンの街")).contains_key(&Field::Message));
    }

    #[test]
    fn test_phone_is_never_validated() {
        let mut f = form("V", "a@b.com", "x", "long enough message");
        f.phone = "not a number".into();
        assert!(validate(&f).is_empty());
    }
}
