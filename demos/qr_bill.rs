use rust_decimal_macros::dec;
use zahlteil::core::*;
use zahlteil::qr::*;

fn main() {
    let creditor = Partner::new(
        "Helvetia Treuhand AG",
        Address {
            street: Some("Bahnhofstrasse 12".to_string()),
            zip: Some("8001".to_string()),
            city: Some("Zürich".to_string()),
            country_code: Some("CH".to_string()),
            ..Address::default()
        },
    );
    let debtor = Partner::new(
        "Marmotte Sàrl",
        Address {
            street: Some("Rue du Lac 3".to_string()),
            zip: Some("1003".to_string()),
            city: Some("Lausanne".to_string()),
            country_code: Some("CH".to_string()),
            ..Address::default()
        },
    );

    let bill = QrBill {
        account: BankAccount::new("CH21 3080 8001 2345 6782 7", creditor),
        amount: dec!(494.00),
        currency: "CHF".to_string(),
        debtor,
        reference_type: ReferenceType::Qr,
        reference: "000000000000000012345678903".to_string(),
        message: Some("Jahresabschluss 2024".to_string()),
    };

    validate_rendering(&bill).unwrap();
    println!("{}", bill.payload().unwrap());
    println!();
    println!("{}", bill.barcode_url(256, 256).unwrap());
}
