//! IBAN normalization, ISO 13616 validation, and QR-IBAN classification.
//!
//! QR-IBANs look like regular IBANs but carry an institution identifier
//! (characters 4..=8) from a reserved range; they signal that payments must
//! reference the account with a structured QR reference.

use std::ops::RangeInclusive;

use super::error::ZahlteilError;
use super::postal::{format_postal_account, validate_postal_account};

/// Institution identifiers reserved for QR-IBANs.
const QR_IID_RANGE: RangeInclusive<u32> = 30000..=31999;

/// Clearing number of Swiss PostFinance.
const CH_POSTFINANCE_CLEARING: &str = "09000";

/// Strip whitespace and uppercase, e.g. `"ch21 3080..."` -> `"CH213080..."`.
pub fn normalize_iban(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Format an IBAN in display form, grouped in blocks of four.
pub fn pretty_iban(iban: &str) -> String {
    let sanitized = normalize_iban(iban);
    let chars: Vec<char> = sanitized.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate an IBAN: country prefix, character set, and the ISO 7064
/// mod-97-10 check over the rearranged number.
pub fn validate_iban(iban: &str) -> Result<(), ZahlteilError> {
    let sanitized = normalize_iban(iban);
    let bad_shape = || {
        ZahlteilError::InvalidFormat(format!("'{iban}' does not have the shape of an IBAN"))
    };
    if !(5..=34).contains(&sanitized.len()) || !sanitized.is_ascii() {
        return Err(bad_shape());
    }
    let bytes = sanitized.as_bytes();
    if !(bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit())
        || !sanitized.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(bad_shape());
    }

    // Move the country prefix and check digits to the end, map letters to
    // 10..35, and reduce mod 97 as we go.
    let mut remainder = 0u32;
    for c in sanitized[4..].chars().chain(sanitized[..4].chars()) {
        let value = c.to_digit(36).ok_or_else(bad_shape)?;
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    if remainder != 1 {
        return Err(ZahlteilError::ChecksumMismatch(format!(
            "IBAN '{iban}' fails the mod-97 check"
        )));
    }
    Ok(())
}

/// Whether a sanitized IBAN is a QR-IBAN, i.e. its institution identifier
/// lies in the reserved range. Non-IBAN shapes are never QR-IBANs.
pub fn is_qr_iban(iban: &str) -> bool {
    let sanitized = normalize_iban(iban);
    if !sanitized.is_ascii() || sanitized.len() < 9 {
        return false;
    }
    let bytes = sanitized.as_bytes();
    if !(bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase()) {
        return false;
    }
    sanitized[4..9]
        .parse::<u32>()
        .is_ok_and(|iid| QR_IID_RANGE.contains(&iid))
}

/// Validate a QR-IBAN: a full IBAN check plus the reserved-range test.
/// Returns the pretty display form for storage.
pub fn validate_qr_iban(iban: &str) -> Result<String, ZahlteilError> {
    validate_iban(iban)?;
    let sanitized = normalize_iban(iban);
    if !is_qr_iban(&sanitized) {
        return Err(ZahlteilError::InvalidFormat(format!(
            "QR-IBAN '{iban}' is invalid: institution id outside 30000-31999"
        )));
    }
    Ok(pretty_iban(&sanitized))
}

/// Read a postal account number out of a PostFinance IBAN.
///
/// `CH09 0900 0000 1000 8060 7` -> `10-8060-7`. Returns `None` when the
/// IBAN is not a Swiss PostFinance one or its tail is not a valid postal
/// account number.
pub fn postal_account_from_iban(iban: &str) -> Option<String> {
    let sanitized = normalize_iban(iban);
    if !sanitized.is_ascii()
        || !sanitized.starts_with("CH")
        || sanitized.len() < 13
        || &sanitized[4..9] != CH_POSTFINANCE_CLEARING
    {
        return None;
    }
    let tail = &sanitized[sanitized.len() - 9..];
    validate_postal_account(tail).ok()?;
    Some(format_postal_account(tail))
}
