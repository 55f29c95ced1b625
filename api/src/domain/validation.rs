use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("valid regex")
});

/// A rule on an entity's fields was violated. The message is safe to show
/// to API clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(format!("{field} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::new(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value, 255)?;
    if !is_valid_email(value.trim()) {
        return Err(ValidationError::new(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

pub fn require_min<T>(field: &str, value: T, min: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min {
        return Err(ValidationError::new(format!(
            "{field} must be at least {min}"
        )));
    }
    Ok(())
}

/// Applies a partial update to a field: `None` keeps the current value.
pub fn patch<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}
