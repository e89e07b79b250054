use zahlteil::core::*;

// --- Postal account numbers ---

#[test]
fn postal_validate_format_round_trip() {
    for dashed in ["01-162-8", "03-162-5", "10-8060-7"] {
        let expanded = expand_postal_account(dashed).unwrap();
        validate_postal_account(&expanded).unwrap();
        assert_eq!(format_postal_account(&expanded), dashed);
        // formatting is idempotent
        assert_eq!(format_postal_account(dashed), dashed);
    }
}

#[test]
fn postal_error_taxonomy() {
    let short = validate_postal_account("12345678").unwrap_err();
    assert!(matches!(short, ZahlteilError::InvalidFormat(_)));
    assert_eq!(
        short.to_string(),
        "invalid format: postal account number '12345678' does not match the 9-digit form"
    );

    let mismatch = validate_postal_account("123456780").unwrap_err();
    assert!(matches!(mismatch, ZahlteilError::ChecksumMismatch(_)));

    let empty = validate_postal_account("").unwrap_err();
    assert!(matches!(empty, ZahlteilError::InvalidFormat(_)));
}

#[test]
fn normalization_hook_behaves_like_persistence_layer() {
    // valid numbers get prettified before storage
    assert_eq!(
        normalize_postal_account("010001628").as_deref(),
        Some("01-162-8")
    );
    // invalid numbers are left for the host to keep as-is
    assert_eq!(normalize_postal_account("not a number"), None);
}

// --- IBAN / QR-IBAN ---

#[test]
fn qr_iban_reserved_range() {
    assert!(is_qr_iban("CH4431999123000889012"));
    assert!(!is_qr_iban("CH4408000123000889012"));
    assert!(!is_qr_iban("CH4432000123000889012"));
}

#[test]
fn qr_iban_validation_and_storage_form() {
    assert_eq!(
        validate_qr_iban("ch21 3080 8001 2345 6782 7").unwrap(),
        "CH21 3080 8001 2345 6782 7"
    );
    assert!(validate_qr_iban("CH09 0900 0000 1000 8060 7").is_err());
    assert!(validate_qr_iban("CH22 3080 8001 2345 6782 7").is_err());
}

#[test]
fn postfinance_postal_extraction() {
    assert_eq!(
        postal_account_from_iban("CH09 0900 0000 1000 8060 7").as_deref(),
        Some("10-8060-7")
    );
    // not PostFinance: falls through to None, never errors
    assert_eq!(postal_account_from_iban("CH21 3080 8001 2345 6782 7"), None);
}

// --- Account classification ---

#[test]
fn classification_chain() {
    assert_eq!(classify_account("01-162-8"), AccountType::Postal);
    assert_eq!(
        classify_account("CH21 3080 8001 2345 6782 7"),
        AccountType::Iban
    );
    // invalid postal number falls through to the bank default
    assert_eq!(classify_account("123456780"), AccountType::Bank);
}

#[test]
fn sanitized_number_keeps_postal_untouched() {
    let partner = Partner::new("Helvetia Treuhand AG", Address::default());
    let postal = BankAccount::new("10-8060-7", partner.clone());
    assert_eq!(postal.sanitized_number(), "10-8060-7");

    let iban = BankAccount::new("ch21 3080 8001 2345 6782 7", partner);
    assert_eq!(iban.sanitized_number(), "CH2130808001234567827");
}
