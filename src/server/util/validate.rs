//! Field checks shared by the parameter types.

use crate::server::error::AppError;

/// Returns the value unchanged if it contains a non-whitespace character.
pub fn require_not_blank(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(value)
}

/// Accepts emails of the basic `local@domain` shape: exactly one `@`, non-empty parts, no
/// whitespace and a dot inside the domain.
pub fn require_email(value: String) -> Result<String, AppError> {
    let value = require_not_blank("email", value)?;

    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest(format!(
            "email '{}' is not a valid email address",
            value
        )));
    }

    Ok(value)
}
