use serde::{Deserialize, Serialize};

use crate::isr::is_isr_reference;

/// Document kind of a bill considered for payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillKind {
    VendorBill,
    VendorRefund,
    CustomerInvoice,
    CustomerRefund,
}

impl BillKind {
    pub fn is_vendor_side(&self) -> bool {
        matches!(self, Self::VendorBill | Self::VendorRefund)
    }
}

/// The slice of a bill that payment grouping looks at. Partner, currency,
/// and bank account are host-side identifiers; equality is all that
/// matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorBill {
    pub kind: BillKind,
    /// Payment reference as entered on the bill.
    pub reference: Option<String>,
    pub commercial_partner: String,
    pub currency: String,
    pub bank_account: String,
}

/// Whether this is a vendor bill carrying a valid ISR reference.
pub fn is_isr_vendor_bill(bill: &VendorBill) -> bool {
    bill.kind.is_vendor_side()
        && bill
            .reference
            .as_deref()
            .is_some_and(is_isr_reference)
}

/// Grouping key for batching bills into payments.
///
/// Bills sharing a structured reference collapse into one payment; all
/// other bills group by whatever default key the caller derives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey<K> {
    StructuredRef {
        partner: String,
        currency: String,
        bank_account: String,
        reference: String,
    },
    Default(K),
}

/// Derive the grouping key for a bill. ISR-referenced vendor bills group by
/// (partner, currency, bank account, reference); everything else falls back
/// to the caller-supplied default key.
pub fn payment_group_key<K>(bill: &VendorBill, default: K) -> GroupKey<K> {
    if is_isr_vendor_bill(bill) {
        GroupKey::StructuredRef {
            partner: bill.commercial_partner.clone(),
            currency: bill.currency.clone(),
            bank_account: bill.bank_account.clone(),
            // reference presence is guaranteed by the predicate
            reference: bill.reference.clone().unwrap_or_default(),
        }
    } else {
        GroupKey::Default(default)
    }
}

/// The payment communication for a batch of grouped bills: the shared ISR
/// reference when the batch is ISR-referenced, the caller's default
/// otherwise. Grouping guarantees all bills of a batch share one reference,
/// so only the first needs looking at.
pub fn payment_communication<'a>(bills: &'a [VendorBill], default: &'a str) -> &'a str {
    match bills.first() {
        Some(first) if is_isr_vendor_bill(first) => {
            first.reference.as_deref().unwrap_or(default)
        }
        _ => default,
    }
}
