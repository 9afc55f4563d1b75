//! Validation utilities for user input

use crate::core::error::{AppError, Result};

/// Minimum password length accepted by the register and login forms.
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, failing with [`AppError::Validation`].
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();

    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') || !email.contains('.') {
        return ValidationResult::err("Enter a valid email");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate that the confirmation matches the password
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::err("Passwords do not match");
    }

    ValidationResult::ok()
}

/// Validate a card or category name (`what` names the thing in the message)
pub fn validate_name(name: &str, what: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return ValidationResult::err(format!("Enter a name for the {}", what));
    }

    ValidationResult::ok()
}
