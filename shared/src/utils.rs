//! # Shared Utility Functions
//!
//! Display and input formatting shared between the dashboard core and any
//! rendering layer.
//!
//! ## IBAN handling
//!
//! IBANs travel canonical (uppercase, no spaces) and are displayed in
//! 4-character groups:
//! - [`canonicalize_iban`] - Strip spaces/punctuation and uppercase for transmission
//! - [`format_iban`] - Group a canonical IBAN for display
//!
//! ## Card input
//!
//! - [`canonicalize_card_number`] - Strip spaces before submission
//! - [`format_card_number`] - Group digits in 4s as the user types
//! - [`format_expiry_input`] - Insert the `/` separator after two digits
//!
//! ## Money display
//!
//! - [`format_amount`] - Currency-tagged amount with thousands separators

/// Canonicalize an IBAN for transmission: keep only alphanumeric characters,
/// uppercased.
///
/// # Examples
///
/// ```rust
/// use shared::utils::canonicalize_iban;
///
/// assert_eq!(
///     canonicalize_iban("DE89 3704 0044 0532 0130 00"),
///     "DE89370400440532013000"
/// );
/// ```
pub fn canonicalize_iban(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Format a canonical IBAN into 4-character groups for display.
///
/// ```rust
/// use shared::utils::format_iban;
///
/// assert_eq!(
///     format_iban("DE89370400440532013000"),
///     "DE89 3704 0044 0532 0130 00"
/// );
/// ```
pub fn format_iban(iban: &str) -> String {
    let canonical = canonicalize_iban(iban);
    let mut out = String::with_capacity(canonical.len() + canonical.len() / 4);
    for (i, c) in canonical.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Strip spaces from a card number before submission.
pub fn canonicalize_card_number(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Group card-number digits in 4s as the user types
/// (`"4242424242424242"` -> `"4242 4242 4242 4242"`).
pub fn format_card_number(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Auto-insert the expiry separator after two digits (`"12"` -> `"12/"`).
///
/// Leaves already-separated input alone so editing does not fight the user.
pub fn format_expiry_input(input: &str) -> String {
    if input.len() == 2 && !input.contains('/') {
        format!("{}/", input)
    } else {
        input.to_string()
    }
}

/// Format an amount with thousands separators and its currency code
/// (e.g. `1234567.89` EUR -> `"1,234,567.89 EUR"`).
pub fn format_amount(value: f64, currency: &str) -> String {
    let formatted = format!("{:.2}", value);
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1).copied().unwrap_or("00");

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    format!("{}{}.{} {}", sign, integer_with_commas, decimal_part, currency)
}
