//! Swiss postal account numbers.
//!
//! A postal account number is 9 digits, the last being a recursive
//! modulo-10 check over the first 8. The short display form separates the
//! segments with dashes and drops leading zeros from the middle one, e.g.
//! `010001628` is written `01-162-8`.

use super::checksum::mod10_append;
use super::error::ZahlteilError;

/// Split a dashed short form `CC-MMMMMM-K` into its three segments.
fn split_dashed(number: &str) -> Option<(&str, &str, &str)> {
    let mut parts = number.splitn(3, '-');
    let prefix = parts.next()?;
    let middle = parts.next()?;
    let check = parts.next()?;
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    (prefix.len() == 2 && digits(prefix) && middle.len() <= 6 && digits(middle) && check.len() == 1 && digits(check))
        .then_some((prefix, middle, check))
}

/// Expand a postal account number to its fixed 9-digit form.
///
/// Dashed short forms have their middle segment zero-padded to 6 digits;
/// anything that does not end up as exactly 9 digits is rejected.
pub fn expand_postal_account(number: &str) -> Result<String, ZahlteilError> {
    if number.is_empty() {
        return Err(ZahlteilError::InvalidFormat(
            "there is no postal account number".to_string(),
        ));
    }
    let expanded = match split_dashed(number) {
        Some((prefix, middle, check)) => format!("{prefix}{middle:0>6}{check}"),
        None => number.to_string(),
    };
    if expanded.len() != 9 || !expanded.chars().all(|c| c.is_ascii_digit()) {
        return Err(ZahlteilError::InvalidFormat(format!(
            "postal account number '{number}' does not match the 9-digit form"
        )));
    }
    Ok(expanded)
}

/// Validate a postal account number, in either 9-digit or dashed form.
pub fn validate_postal_account(number: &str) -> Result<(), ZahlteilError> {
    let expanded = expand_postal_account(number)?;
    let recomputed = mod10_append(&expanded[..8])?;
    if recomputed != expanded {
        return Err(ZahlteilError::ChecksumMismatch(format!(
            "postal account number '{number}' fails its check digit"
        )));
    }
    Ok(())
}

/// Whether `number` is a valid postal account number. Validation failures
/// fall through to `false` so callers can try other account classifications.
pub fn is_postal_account(number: &str) -> bool {
    validate_postal_account(number).is_ok()
}

/// Format a postal account or ISR subscription number in the canonical
/// dashed form, e.g. `010001628` -> `01-162-8`.
///
/// Already-dashed input is returned unchanged, so the function is
/// idempotent. Input that is neither dashed nor 9 digits is returned as-is.
pub fn format_postal_account(number: &str) -> String {
    if split_dashed(number).is_some() {
        return number.to_string();
    }
    if number.len() != 9 || !number.chars().all(|c| c.is_ascii_digit()) {
        return number.to_string();
    }
    let prefix = &number[..2];
    let middle = number[2..8].trim_start_matches('0');
    let check = &number[8..];
    format!("{prefix}-{middle}-{check}")
}

/// Normalization hook for the host's persistence layer: returns the pretty
/// dashed form when `number` validates, `None` when it does not (in which
/// case the host keeps the raw value untouched).
pub fn normalize_postal_account(number: &str) -> Option<String> {
    validate_postal_account(number)
        .ok()
        .map(|_| format_postal_account(number))
}
