use regex::Regex;
use std::sync::OnceLock;

use crate::errors::FieldError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and ".." are rejected separately; the regex crate has no lookahead.
        let pattern = r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

pub fn validate_required<'a>(
    field: &'static str,
    value: Option<&'a str>,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    if value.is_none() {
        errors.push(FieldError::new(field, "invalid_type", "Required"));
    }
    value
}

pub fn validate_min_chars<'a>(
    field: &'static str,
    value: &'a str,
    min: usize,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    if value.chars().count() < min {
        errors.push(FieldError::new(field, "too_small", message));
        return None;
    }
    Some(value)
}

pub fn validate_email<'a>(
    field: &'static str,
    value: &'a str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    if !is_valid_email(value) {
        errors.push(FieldError::new(
            field,
            "invalid_string",
            "Please enter a valid email address",
        ));
        return None;
    }
    Some(value)
}
