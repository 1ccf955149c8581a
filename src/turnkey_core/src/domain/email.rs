use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Invalid email address")]
    Invalid,
}

/// Email address in canonical form.
///
/// Surrounding whitespace is trimmed and the whole address is lowercased at
/// parse time, so two addresses that differ only in case compare equal and
/// collide on uniqueness checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        let canonical = trimmed.to_lowercase();
        if !EMAIL_REGEX.is_match(&canonical) {
            return Err(EmailError::Invalid);
        }

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
