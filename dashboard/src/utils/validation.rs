//! Validation utilities for user input.
//!
//! All validation here runs before any network call; a failed check means
//! the server is never contacted for that submission.

use shared::utils::canonicalize_iban;

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
}

/// Validate a money amount entered as text.
///
/// Deposits and withdrawals require a numeric amount of at least 1 unit.
pub fn validate_amount(input: &str) -> ValidationResult {
    match parse_amount(input) {
        Some(_) => ValidationResult::ok(),
        None => ValidationResult::err("Valid amount (minimum 1) is required"),
    }
}

/// Parse an amount string, returning `None` for empty, non-numeric or
/// sub-minimum (< 1) input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => Some(value),
        _ => None,
    }
}

/// Validate the bank-account form fields.
///
/// Returns the first failing field's message; the IBAN length check runs on
/// the canonical (space-stripped) form.
pub fn validate_bank_form(
    bank_name: &str,
    account_holder_name: &str,
    iban: &str,
) -> ValidationResult {
    if bank_name.trim().is_empty() {
        return ValidationResult::err("Bank name is required");
    }

    if account_holder_name.trim().is_empty() {
        return ValidationResult::err("Beneficiary name is required");
    }

    if iban.trim().is_empty() {
        return ValidationResult::err("IBAN number is required");
    }

    if canonicalize_iban(iban).len() < 15 {
        return ValidationResult::err("IBAN number appears to be too short");
    }

    ValidationResult::ok()
}

/// Validate an entered referral code. Only the non-empty check is local;
/// existence, uniqueness and self-referral rules live on the server.
pub fn validate_referral_code(code: &str) -> ValidationResult {
    if code.trim().is_empty() {
        return ValidationResult::err("Invalid referral code format");
    }

    ValidationResult::ok()
}

/// Validate the add-card form. Checksum and expiry-date validity are
/// delegated to the payment processor; this only rejects blank fields.
pub fn validate_card_form(
    card_number: &str,
    expiry: &str,
    cvv: &str,
    name: &str,
) -> ValidationResult {
    if card_number.trim().is_empty() {
        return ValidationResult::err("Card number is required");
    }

    if expiry.trim().is_empty() {
        return ValidationResult::err("Expiry is required");
    }

    if cvv.trim().is_empty() {
        return ValidationResult::err("CVV is required");
    }

    if name.trim().is_empty() {
        return ValidationResult::err("Cardholder name is required");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validation() {
        assert!(validate_amount("1").is_valid);
        assert!(validate_amount("250.50").is_valid);
        assert!(!validate_amount("0").is_valid);
        assert!(!validate_amount("").is_valid);
        assert!(!validate_amount("0.99").is_valid);
        assert!(!validate_amount("abc").is_valid);
        assert!(!validate_amount("-5").is_valid);

        assert_eq!(
            validate_amount("0").error.as_deref(),
            Some("Valid amount (minimum 1) is required")
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 42 "), Some(42.0));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_bank_form_validation() {
        assert!(validate_bank_form("N26", "Ada Okafor", "DE89 3704 0044 0532 0130 00").is_valid);
        assert!(!validate_bank_form("", "Ada Okafor", "DE89370400440532013000").is_valid);
        assert!(!validate_bank_form("N26", "", "DE89370400440532013000").is_valid);
        assert!(!validate_bank_form("N26", "Ada Okafor", "").is_valid);

        // 14 chars after stripping spaces: too short
        let short = validate_bank_form("N26", "Ada Okafor", "DE89 3704 0044 05");
        assert!(!short.is_valid);
        assert_eq!(
            short.error.as_deref(),
            Some("IBAN number appears to be too short")
        );
    }

    #[test]
    fn test_referral_code_validation() {
        assert!(validate_referral_code("ABC123").is_valid);
        assert!(!validate_referral_code("").is_valid);
        assert!(!validate_referral_code("   ").is_valid);
    }

    #[test]
    fn test_card_form_validation() {
        assert!(validate_card_form("4242 4242 4242 4242", "12/26", "123", "Ada Okafor").is_valid);
        assert!(!validate_card_form("", "12/26", "123", "Ada Okafor").is_valid);
        assert!(!validate_card_form("4242424242424242", "", "123", "Ada Okafor").is_valid);
    }
}
