use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Contact details entered alongside a booking. All three fields are
/// required before submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// Validates all fields synchronously and reports per-field messages.
    /// Never touches the network and never panics.
    pub fn validate(&self) -> ContactErrors {
        let mut errors = ContactErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Please enter your name");
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Please enter your email");
        } else if !EMAIL_REGEX.is_match(&self.email) {
            errors.email = Some("Email address is invalid");
        }
        if self.phone.trim().is_empty() {
            errors.phone = Some("Please enter your phone number");
        } else if !PHONE_REGEX.is_match(&self.phone) {
            errors.phone = Some("Phone number must be exactly 10 digits");
        }
        errors
    }

    pub(crate) fn reset(&mut self) { *self = Self::default(); }
}

/// Per-field validation messages; an unset field passed its checks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    phone: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn name(&self) -> Option<&'static str> { self.name }
    pub fn email(&self) -> Option<&'static str> { self.email }
    pub fn phone(&self) -> Option<&'static str> { self.phone }
}

impl std::fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> =
            [self.name, self.email, self.phone].into_iter().flatten().collect();
        f.write_str(&messages.join("; "))
    }
}
