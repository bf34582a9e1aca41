//! Form field validation rules.
//!
//! On submit only `[required]` fields are checked; on blur every field runs
//! the same single-field check, where the emptiness rule applies only to
//! required fields.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const ERROR_CLASS: &str = "field-error";
pub const ERROR_ANNOTATION_CLASSES: &str = "text-red-500 text-sm mt-1 field-error";
pub const INVALID_FIELD_CLASS: &str = "border-red-500";
pub const FIELD_SELECTOR: &str = "input, textarea, select";
pub const REQUIRED_SELECTOR: &str = "[required]";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ASCII digits only, like the browser's `\d`.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Other,
}

impl FieldKind {
    /// Classify by the control's `type`, compared case-insensitively.
    pub fn from_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            FieldKind::Email
        } else if input_type.eq_ignore_ascii_case("tel") {
            FieldKind::Tel
        } else {
            FieldKind::Other
        }
    }
}

/// Snapshot of one form control at validation time.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub kind: FieldKind,
    pub required: bool,
    pub value: &'a str,
}

/// Tested against the raw value: surrounding whitespace fails.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Whitespace anywhere in the number is ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE.is_match(&compact)
}

pub fn check(field: &Field<'_>) -> Result<(), FieldError> {
    let blank = field.value.trim().is_empty();
    if blank {
        return if field.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(field.value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(field.value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Outcome of checking every required field of a form, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormReport {
    pub results: Vec<Result<(), FieldError>>,
}

impl FormReport {
    pub fn blocks_submit(&self) -> bool {
        self.results.iter().any(Result::is_err)
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }
}

/// Check all fields without short-circuiting.
pub fn check_submission<'a>(required_fields: impl IntoIterator<Item = Field<'a>>) -> FormReport {
    FormReport {
        results: required_fields.into_iter().map(|field| check(&field)).collect(),
    }
}
