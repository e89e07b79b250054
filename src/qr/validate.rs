//! Validation the host runs before sending a payload off for rendering.

use crate::core::{mod10_verify, Partner, ZahlteilError};

use super::payload::{QrBill, ReferenceType};

fn check_partner(partner: &Partner, role: &str) -> Result<(), ZahlteilError> {
    let address = &partner.address;
    let filled = |value: &Option<String>| {
        value
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    };
    let missing = |field: &str| ZahlteilError::MissingField(format!("{role}.{field}"));

    if !filled(&address.zip) {
        return Err(missing("zip"));
    }
    if !filled(&address.city) {
        return Err(missing("city"));
    }
    if !filled(&address.country_code) {
        return Err(missing("country_code"));
    }
    if !filled(&address.street) && !filled(&address.street2) {
        return Err(missing("street"));
    }
    Ok(())
}

/// Check that a bill can be rendered: both partners carry a complete
/// combined address, and a QR-IBAN account is paired with a valid QR
/// reference.
pub fn validate_rendering(bill: &QrBill) -> Result<(), ZahlteilError> {
    check_partner(&bill.account.partner, "creditor")?;
    check_partner(&bill.debtor, "debtor")?;

    if bill.account.is_qr_iban() {
        if bill.reference_type != ReferenceType::Qr {
            return Err(ZahlteilError::InvalidFormat(
                "a QR-IBAN account requires a structured QR reference".to_string(),
            ));
        }
        if bill.reference.len() != 27 || !bill.reference.chars().all(|c| c.is_ascii_digit()) {
            return Err(ZahlteilError::InvalidFormat(format!(
                "QR reference '{}' must be 27 digits",
                bill.reference
            )));
        }
        mod10_verify(&bill.reference)?;
    }
    Ok(())
}
