//! Property-based tests for request validation and avatars

use proptest::prelude::*;

use authgate::backend::auth::avatar::avatar_url;
use authgate::backend::auth::handlers::RegisterRequest;
use authgate::backend::auth::validation::{
    is_email, is_special_character, validate_registration, MIN_PASSWORD_LENGTH,
};
use authgate::backend::ApiError;

fn registration(password: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        password: Some(password.to_string()),
    }
}

proptest! {
    #[test]
    fn test_avatar_ignores_case_and_padding(local in "[a-z0-9]{1,16}", domain in "[a-z]{2,10}") {
        let email = format!("{local}@{domain}.com");
        let noisy = format!("  {}\t", email.to_uppercase());
        prop_assert_eq!(avatar_url(&noisy), avatar_url(&email));
    }

    #[test]
    fn test_avatar_is_a_sha256_url(email in "\\PC{0,40}") {
        let url = avatar_url(&email);
        let hash = url
            .strip_prefix("https://www.gravatar.com/avatar/")
            .and_then(|rest| rest.strip_suffix("?s=200&r=pg&d=mm"))
            .unwrap();
        prop_assert_eq!(hash.len(), 64);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_simple_addresses_are_emails(local in "[a-z][a-z0-9._]{0,20}[a-z0-9]", domain in "[a-z]{1,10}", tld in "[a-z]{2,6}") {
        prop_assume!(!local.contains(".."));
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_email(&email), "{} should be accepted", email);
    }

    #[test]
    fn test_addresses_without_at_are_rejected(value in "[^@]{0,40}") {
        prop_assert!(!is_email(&value));
    }

    #[test]
    fn test_strong_passwords_pass(
        upper in "[A-Z]",
        lower in "[a-z]{1,8}",
        digit in "[0-9]{1,4}",
        special in "[!$%&*.?_~]",
    ) {
        let password = format!("{upper}{lower}{digit}{special}");
        prop_assume!(password.chars().count() >= MIN_PASSWORD_LENGTH);
        prop_assert!(validate_registration(registration(&password)).is_ok());
    }

    #[test]
    fn test_passwords_without_special_characters_fail(password in "[A-Za-z0-9]{0,24}") {
        match validate_registration(registration(&password)) {
            Err(ApiError::Validation(errors)) => {
                prop_assert!(errors
                    .iter()
                    .any(|e| e.msg == "Password must contain at least 1 special character"));
            }
            other => prop_assert!(false, "expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_excluded_symbols_are_not_special(c in prop::sample::select(vec!['#', '@', '\\'])) {
        prop_assert!(!is_special_character(c));
    }

    #[test]
    fn test_letters_and_digits_are_not_special(c in "[A-Za-z0-9]") {
        let c = c.chars().next().unwrap();
        prop_assert!(!is_special_character(c));
    }
}
