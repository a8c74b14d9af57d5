//! Email checks used by the survey form.
//!
//! Two checks exist and they are intentionally not equally strict:
//! [`is_email_valid`] backs the live feedback shown while typing and follows
//! the browser's `input[type=email]` grammar, while
//! [`email_has_minimal_shape`] gates submission and only asks for an `@`.

use std::sync::LazyLock;

use regex::Regex;

/// WHATWG `valid email address` grammar, tightened to require a dotted domain.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Full format check on the trimmed value.
pub fn is_email_valid(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && EMAIL_RE.is_match(value)
}

/// Submission-time check: non-blank and contains `@`.
pub fn email_has_minimal_shape(value: &str) -> bool {
    !value.trim().is_empty() && value.contains('@')
}

/// Whether the inline error should be visible for the current email input.
/// A blank field never shows the live error.
pub fn live_email_error(value: &str) -> bool {
    !value.trim().is_empty() && !is_email_valid(value)
}
