/**
 * Request Validation
 *
 * This module validates registration and login bodies and produces the
 * field-level error list returned with a 400.
 *
 * # Rules
 *
 * Registration:
 * - `name` is required and non-empty
 * - `email` must be a valid address
 * - `password` is required, at least 6 characters, and must contain a
 *   special character, an uppercase letter directly followed by a lowercase
 *   letter, and a digit
 *
 * Login:
 * - `email` must be a valid address
 * - `password` must be present (no strength rules)
 *
 * Every rule runs; errors are collected rather than returned on the first
 * failure.
 */

use serde::Serialize;

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::error::ApiError;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters in length";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least 1 special character";
pub const PASSWORD_NEEDS_MIXED_CASE: &str =
    "Password must contain both upper and lower case characters";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// A single validation or request error as sent to the client
///
/// `param` and `location` are only present for field errors; general
/// errors (bad credentials, duplicate user) carry just `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
}

impl FieldError {
    /// Error tied to a body field
    pub fn field(param: &'static str, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param),
            location: Some("body"),
        }
    }

    /// Error not tied to any field
    pub fn general(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }
}

/// Collects field errors across all checks
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `msg` against `param` unless `passed`
    pub fn check(&mut self, passed: bool, param: &'static str, msg: &str) -> &mut Self {
        if !passed {
            self.errors.push(FieldError::field(param, msg));
        }
        self
    }

    /// `Ok` if no check failed, otherwise every recorded error
    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// A registration body that passed validation
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A login body that passed validation
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validate a registration request
///
/// # Errors
///
/// `ApiError::Validation` listing every failed rule, in field order
/// name, email, password.
pub fn validate_registration(request: RegisterRequest) -> Result<Registration, ApiError> {
    let mut validator = Validator::new();

    let name = request.name.unwrap_or_default();
    validator.check(!name.is_empty(), "name", NAME_REQUIRED);

    let email = request.email.unwrap_or_default();
    validator.check(is_email(&email), "email", INVALID_EMAIL);

    match request.password.as_deref() {
        None => {
            // A missing password also fails every strength rule
            validator.check(false, "password", PASSWORD_REQUIRED);
            check_password_strength(&mut validator, "");
        }
        Some(password) => check_password_strength(&mut validator, password),
    }

    validator.finish()?;

    Ok(Registration {
        name,
        email,
        password: request.password.unwrap_or_default(),
    })
}

/// Validate a login request
///
/// Only presence is checked for the password; an empty string is present.
pub fn validate_login(request: LoginRequest) -> Result<Credentials, ApiError> {
    let mut validator = Validator::new();

    let email = request.email.unwrap_or_default();
    validator.check(is_email(&email), "email", INVALID_EMAIL);
    validator.check(request.password.is_some(), "password", PASSWORD_REQUIRED);

    validator.finish()?;

    Ok(Credentials {
        email,
        password: request.password.unwrap_or_default(),
    })
}

fn check_password_strength(validator: &mut Validator, password: &str) {
    validator
        .check(
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password",
            PASSWORD_TOO_SHORT,
        )
        .check(
            password.chars().any(is_special_character),
            "password",
            PASSWORD_NEEDS_SPECIAL,
        )
        .check(has_upper_lower_pair(password), "password", PASSWORD_NEEDS_MIXED_CASE)
        .check(
            password.chars().any(|c| c.is_ascii_digit()),
            "password",
            PASSWORD_NEEDS_DIGIT,
        );
}

/// Characters accepted as "special" in passwords
///
/// ASCII punctuation except `#`, `@` and `\`.
pub fn is_special_character(c: char) -> bool {
    matches!(
        c,
        '$'..='/' | ':'..='?' | '{'..='~' | '!' | '"' | '^' | '_' | '`' | '[' | ']'
    )
}

/// True if an ASCII uppercase letter is immediately followed by a lowercase one
pub fn has_upper_lower_pair(value: &str) -> bool {
    value
        .chars()
        .zip(value.chars().skip(1))
        .any(|(first, second)| first.is_ascii_uppercase() && second.is_ascii_lowercase())
}

/// Validate email address format
///
/// Addresses must be:
/// - at most 254 characters, with exactly one `@` separating local part and domain
/// - local part of 1-64 bytes of letters and digits in any script plus the
///   atom symbols, dots allowed but not leading, trailing or doubled
/// - domain of at least two dot-separated ASCII labels (letters, digits, hyphens;
///   no leading or trailing hyphen) ending in an alphabetic TLD of 2+ letters
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    match value.rsplit_once('@') {
        Some((local, domain)) => is_local_part(local) && is_domain(domain),
        None => false,
    }
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= MAX_LOCAL_PART_LENGTH
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c))
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_domain_label(label)) {
        return false;
    }

    // Last label is the TLD
    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
