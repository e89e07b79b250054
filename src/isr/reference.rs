//! ISR reference and subscription number handling.

use crate::core::{
    expand_postal_account, is_structured_reference, mod10_append, validate_postal_account,
    ZahlteilError,
};

/// Derive the 27-digit ISR reference from an invoice number.
///
/// Keeps the digits of the invoice number, takes the last 26 when there are
/// more, left-pads with zeros to 26, and appends the modulo-10 check digit.
///
/// `INV/01234567890` -> `000000000000000012345678903`
pub fn isr_reference_from_invoice_number(invoice_number: &str) -> Result<String, ZahlteilError> {
    let digits: String = invoice_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Err(ZahlteilError::InvalidFormat(format!(
            "invoice number '{invoice_number}' contains no digits"
        )));
    }
    let tail = if digits.len() > 26 {
        &digits[digits.len() - 26..]
    } else {
        digits.as_str()
    };
    mod10_append(&format!("{tail:0>26}"))
}

/// Whether `reference` is a valid ISR reference: 27 digits with a matching
/// modulo-10 check digit (same shape as a QR reference).
pub fn is_isr_reference(reference: &str) -> bool {
    is_structured_reference(reference)
}

/// The fixed 9-digit subscription number used inside the optical line,
/// derived from the dashed form the bank hands out (`01-162-8` ->
/// `010001628`). The input must be a valid postal-style number.
pub fn isr_subscription_number(subscription: &str) -> Result<String, ZahlteilError> {
    validate_postal_account(subscription)?;
    expand_postal_account(subscription)
}

/// Group a reference for display in blocks of five from the right, the way
/// it is printed on the slip: `000000000000000012345678903` ->
/// `00 00000 00000 00001 23456 78903`.
pub fn format_isr_reference(reference: &str) -> String {
    let chars: Vec<char> = reference.chars().collect();
    let mut groups = Vec::new();
    let mut end = chars.len();
    while end > 0 {
        let start = end.saturating_sub(5);
        groups.push(chars[start..end].iter().collect::<String>());
        end = start;
    }
    groups.reverse();
    groups.join(" ")
}
