use rust_decimal_macros::dec;
use zahlteil::core::*;
use zahlteil::isr::*;

fn main() {
    // The bank hands out a subscription number per currency.
    let account = BankAccount {
        isr_subscription_chf: Some("01-162-8".to_string()),
        ..BankAccount::new(
            "ISR",
            Partner::new("Helvetia Treuhand AG", Address::default()),
        )
    };

    // The structured reference is derived from the invoice number.
    let reference = isr_reference_from_invoice_number("INV/01234567890").unwrap();
    println!("reference:     {}", format_isr_reference(&reference));

    let slip = IsrSlip {
        amount: dec!(494.00),
        currency: IsrCurrency::Chf,
        reference,
        subscription: account.isr_subscription("CHF").unwrap().to_string(),
    };
    println!("optical line:  {}", slip.optical_line().unwrap());
}
