use zahlteil::core::*;

fn main() {
    // Validate and prettify a postal account number the way the host's
    // persistence layer would before storing it.
    for raw in ["010001628", "01-162-8", "12345678", "123456780"] {
        match normalize_postal_account(raw) {
            Some(pretty) => println!("{raw:>12} -> stored as {pretty}"),
            None => {
                let err = validate_postal_account(raw).unwrap_err();
                println!("{raw:>12} -> kept raw ({err})");
            }
        }
    }

    // Account classification falls through on failure, never errors.
    for number in [
        "01-162-8",
        "CH21 3080 8001 2345 6782 7",
        "CH09 0900 0000 1000 8060 7",
        "123-456-789",
    ] {
        println!("{number:>28} -> {:?}", classify_account(number));
    }

    // PostFinance IBANs embed a postal account number.
    let postal = postal_account_from_iban("CH09 0900 0000 1000 8060 7");
    println!("postal account from IBAN: {postal:?}");
}
