//! # Referral Share Links
//!
//! Derives the referral deep link and its QR representation. The QR payload
//! is the exact URL string, so any compliant reader resolves the same
//! registration link as the copyable text.

use qrcode::render::svg;
use qrcode::QrCode;

use crate::core::error::{AppError, Result};

/// Build the referral registration deep link:
/// `<origin>/register?ref=<code>`.
///
/// # Examples
///
/// ```rust
/// use dashboard::utils::links::referral_url;
///
/// assert_eq!(
///     referral_url("https://app.example.com", "ABC123"),
///     "https://app.example.com/register?ref=ABC123"
/// );
/// ```
pub fn referral_url(origin: &str, code: &str) -> String {
    format!("{}/register?ref={}", origin.trim_end_matches('/'), code)
}

/// Render the referral link as an SVG QR code.
pub fn referral_qr_svg(origin: &str, code: &str) -> Result<String> {
    let url = referral_url(origin, code);
    let qr = QrCode::new(url.as_bytes())
        .map_err(|e| AppError::State(format!("Failed to encode QR code: {}", e)))?;

    Ok(qr
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
