//! Form Validation
//!
//! Client-side field rules, checked on input and again on submit before any
//! request is sent. Error strings are what the forms render.

use std::sync::LazyLock;

use regex::Regex;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z ]{2,30}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[a-zA-Z\d.-]+\.[a-zA-Z]{2,}$").unwrap());
static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{4,10}$").unwrap());

pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Name is required".to_string());
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Invalid name".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if !PASSWORD_RE.is_match(password) {
        return Err(
            "Password should be 4-10 characters long and contain only letters or numbers"
                .to_string(),
        );
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), String> {
    if confirm.is_empty() {
        return Err("Confirm password is required".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("Jane Doe").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("J").is_err());
        assert!(validate_username("jane42").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("j.doe-x@sub.example.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("jane@example").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("abc1").is_ok());
        assert!(validate_password("A1b2C3d4e5").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("abc").is_err());
        assert!(validate_password("toolongpassword").is_err());
        assert!(validate_password("has space").is_err());
    }

    #[test]
    fn test_confirm_password_rules() {
        assert!(validate_confirm_password("abcd", "abcd").is_ok());
        assert!(validate_confirm_password("abcd", "").is_err());
        assert_eq!(
            validate_confirm_password("abcd", "abce").unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_title_rules() {
        assert!(validate_title("Buy milk").is_ok());
        assert!(validate_title("   ").is_err());
    }
}
