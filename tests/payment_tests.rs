//! Payment grouping: one structured reference, one payment.

#![cfg(feature = "payment")]

use std::collections::HashMap;

use zahlteil::payment::*;

const ISR_REF_A: &str = "000000000000000012345678903";
const ISR_REF_B: &str = "210000000003139471430009017";

fn bill(reference: Option<&str>, partner: &str) -> VendorBill {
    VendorBill {
        kind: BillKind::VendorBill,
        reference: reference.map(str::to_string),
        commercial_partner: partner.to_string(),
        currency: "CHF".to_string(),
        bank_account: "01-162-8".to_string(),
    }
}

#[test]
fn shared_reference_collapses_into_one_group() {
    let bills = vec![
        bill(Some(ISR_REF_A), "Marmotte Sàrl"),
        bill(Some(ISR_REF_A), "Marmotte Sàrl"),
        bill(Some(ISR_REF_B), "Marmotte Sàrl"),
        bill(None, "Marmotte Sàrl"),
        bill(None, "Marmotte Sàrl"),
    ];

    // group the way the host's payment register would
    let mut groups: HashMap<GroupKey<usize>, Vec<&VendorBill>> = HashMap::new();
    for (i, b) in bills.iter().enumerate() {
        // non-ISR bills each get their own default key here
        groups.entry(payment_group_key(b, i)).or_default().push(b);
    }

    // two ISR groups plus two singleton default groups
    assert_eq!(groups.len(), 4);
    let key_a = payment_group_key(&bills[0], 0);
    assert_eq!(groups[&key_a].len(), 2);
}

#[test]
fn key_distinguishes_partner_currency_account_and_reference() {
    let base = bill(Some(ISR_REF_A), "Marmotte Sàrl");
    let same = bill(Some(ISR_REF_A), "Marmotte Sàrl");
    assert_eq!(payment_group_key(&base, ()), payment_group_key(&same, ()));

    let other_partner = bill(Some(ISR_REF_A), "Edelweiss AG");
    assert_ne!(
        payment_group_key(&base, ()),
        payment_group_key(&other_partner, ())
    );

    let other_currency = VendorBill {
        currency: "EUR".to_string(),
        ..base.clone()
    };
    assert_ne!(
        payment_group_key(&base, ()),
        payment_group_key(&other_currency, ())
    );

    let other_account = VendorBill {
        bank_account: "03-162-5".to_string(),
        ..base.clone()
    };
    assert_ne!(
        payment_group_key(&base, ()),
        payment_group_key(&other_account, ())
    );

    let other_reference = bill(Some(ISR_REF_B), "Marmotte Sàrl");
    assert_ne!(
        payment_group_key(&base, ()),
        payment_group_key(&other_reference, ())
    );
}

#[test]
fn grouped_communication_is_the_single_reference() {
    let group = vec![
        bill(Some(ISR_REF_A), "Marmotte Sàrl"),
        bill(Some(ISR_REF_A), "Marmotte Sàrl"),
    ];
    assert_eq!(payment_communication(&group, "Bills 0042+0043"), ISR_REF_A);

    let free = vec![bill(None, "Marmotte Sàrl")];
    assert_eq!(
        payment_communication(&free, "Bills 0042+0043"),
        "Bills 0042+0043"
    );
}
