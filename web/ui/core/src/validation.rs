use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn has_minimum_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_number(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Only letters, digits and the accepted symbols may appear.
pub fn has_allowed_chars_only(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
}

pub fn is_strong_password(password: &str) -> bool {
    has_minimum_length(password)
        && has_lowercase(password)
        && has_uppercase(password)
        && has_number(password)
        && has_symbol(password)
        && has_allowed_chars_only(password)
}
