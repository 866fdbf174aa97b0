//! Client-side form validation for the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these checks on blur and on submit and turn the outcome into
//! local error flags. Nothing here retries or corrects input; a failed check
//! only decides which message is rendered next to the field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 25;

/// Symbols accepted as the required special character of a password.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^*+=-";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Per-field validation failure shown under an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPassword,
    PasswordMismatch,
}

impl FieldError {
    /// User-facing message for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "필수 입력 항목입니다.",
            Self::InvalidEmail => "올바른 이메일 형식이 아닙니다.",
            Self::InvalidPassword => "비밀번호는 영문, 숫자, 특수문자(!@#$%^*+=-)를 포함한 8~25자여야 합니다.",
            Self::PasswordMismatch => "비밀번호가 일치하지 않습니다.",
        }
    }
}

/// `true` when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-insensitive `local@domain.tld` check with a TLD of two or more letters.
///
/// Case folding is ASCII-only, so letters such as U+017F or U+212A never
/// match `[A-Z]`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 8 to 25 characters with at least one ASCII letter, one digit, and one
/// symbol from [`PASSWORD_SYMBOLS`]. Line terminators are never accepted.
///
/// Length counts Unicode scalar values, so a character outside the Basic
/// Multilingual Plane (e.g. an emoji) counts once here where a UTF-16
/// length would count it twice.
pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }
    if password.chars().any(is_line_terminator) {
        return false;
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    has_letter && has_digit && has_symbol
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Exact string comparison of the password and its confirmation.
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}

/// Blur check for an email input.
///
/// Surrounding whitespace is ignored: the pattern is matched against the
/// trimmed value, which is also what gets submitted.
pub fn check_email(email: &str) -> Option<FieldError> {
    if is_blank(email) {
        Some(FieldError::Required)
    } else if !is_valid_email(email.trim()) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

/// Blur check for a password input on the register page.
pub fn check_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_password(password) {
        Some(FieldError::InvalidPassword)
    } else {
        None
    }
}

/// Blur check for the password confirmation input.
pub fn check_confirm_password(password: &str, confirm_password: &str) -> Option<FieldError> {
    if confirm_password.is_empty() {
        Some(FieldError::Required)
    } else if !passwords_match(password, confirm_password) {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    }
}

/// Blur check for any other required text input.
pub fn check_required(value: &str) -> Option<FieldError> {
    is_blank(value).then_some(FieldError::Required)
}
