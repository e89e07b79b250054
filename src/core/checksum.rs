//! Recursive modulo-10 check digit, the variant used by Swiss postal
//! accounts, ISR references, and QR references (ISO 7064 MOD 10).

use super::error::ZahlteilError;

/// Transition table indexed by (carry + digit) mod 10.
const MOD10_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Compute the check digit for a digit string.
///
/// Runs the carry through [`MOD10_TABLE`] once per digit; the check digit
/// is `(10 - carry) mod 10`.
pub fn mod10_check_digit(digits: &str) -> Result<u8, ZahlteilError> {
    if digits.is_empty() {
        return Err(ZahlteilError::InvalidFormat(
            "empty digit string".to_string(),
        ));
    }
    let mut carry = 0u32;
    for c in digits.chars() {
        let d = c.to_digit(10).ok_or_else(|| {
            ZahlteilError::InvalidFormat(format!("non-digit character '{c}' in '{digits}'"))
        })?;
        carry = u32::from(MOD10_TABLE[((carry + d) % 10) as usize]);
    }
    Ok(((10 - carry) % 10) as u8)
}

/// Append the check digit to a digit string (the original `mod10r`).
pub fn mod10_append(digits: &str) -> Result<String, ZahlteilError> {
    Ok(format!("{digits}{}", mod10_check_digit(digits)?))
}

/// Verify that the last digit of `full` is the check digit of the rest.
pub fn mod10_verify(full: &str) -> Result<(), ZahlteilError> {
    if full.len() < 2 || !full.chars().all(|c| c.is_ascii_digit()) {
        return Err(ZahlteilError::InvalidFormat(format!(
            "'{full}' is not a checkable digit string"
        )));
    }
    let stem = &full[..full.len() - 1];
    let expected = mod10_check_digit(stem)?;
    let actual = &full[full.len() - 1..];
    if actual != expected.to_string() {
        return Err(ZahlteilError::ChecksumMismatch(format!(
            "'{full}' ends in {actual}, expected check digit {expected}"
        )));
    }
    Ok(())
}

/// Whether `reference` is a structured (ISR/QR) reference: 27 digits, the
/// 27th being the modulo-10 check over the first 26.
pub fn is_structured_reference(reference: &str) -> bool {
    reference.len() == 27
        && reference.chars().all(|c| c.is_ascii_digit())
        && mod10_verify(reference).is_ok()
}
