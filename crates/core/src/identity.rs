//! Account validation rules for the identity gate.
//!
//! Both checks run before any database work so obviously-invalid input
//! never costs a round-trip. The defaults mirror the institution this
//! platform serves; both are overridable through configuration.

/// Institutional email suffix accepted by default.
pub const DEFAULT_ALLOWED_EMAIL_DOMAIN: &str = "@stud.ase.ro";

/// Minimum password length accepted by default.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Validate that an email belongs to the allowed institutional domain.
pub fn validate_email_domain(email: &str, allowed_domain: &str) -> Result<(), String> {
    if email.ends_with(allowed_domain) {
        Ok(())
    } else {
        Err(format!(
            "Access restricted to {allowed_domain} accounts only."
        ))
    }
}

/// Validate that a password meets the minimum length requirement.
pub fn validate_password_length(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters."
        ));
    }
    Ok(())
}
