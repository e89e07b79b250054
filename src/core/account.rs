use serde::{Deserialize, Serialize};

use super::iban;
use super::postal;

/// Kinds of account numbers the Swiss payment conventions distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Swiss postal account number (9 digits or dashed short form).
    Postal,
    /// Valid IBAN.
    Iban,
    /// Anything else; treated as a plain domestic bank account.
    Bank,
}

/// Classify an account number string.
///
/// Postal numbers win over IBANs; a postal number may carry the holder name
/// after the first space (`"10-8060-7  Marmotte Sàrl"`), so the first token
/// is tried as well. Classification never fails: anything unrecognized is a
/// plain [`AccountType::Bank`] account.
pub fn classify_account(acc_number: &str) -> AccountType {
    if postal::is_postal_account(acc_number) {
        return AccountType::Postal;
    }
    let first_token = acc_number.split(' ').next().unwrap_or("");
    if !first_token.is_empty() && postal::is_postal_account(first_token) {
        return AccountType::Postal;
    }
    if iban::validate_iban(acc_number).is_ok() {
        AccountType::Iban
    } else {
        AccountType::Bank
    }
}

/// Postal address, all components optional. Missing components render as
/// empty strings in payloads, never as omitted field slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and house number.
    pub street: Option<String>,
    /// Additional address line.
    pub street2: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country_code: Option<String>,
}

/// A creditor or debtor party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub address: Address,
}

impl Partner {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// A bank account as the host system stores it, with the Swiss-specific
/// configuration needed for ISR slips and QR-bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Raw account number: IBAN, postal number, or anything else.
    pub acc_number: String,
    /// Account holder name when it differs from the partner name.
    pub holder_name: Option<String>,
    /// The partner owning the account (the creditor on outgoing invoices).
    pub partner: Partner,
    /// Swiss postal account number: the vendor's own number, or the client
    /// number on the company's account.
    pub postal: Option<String>,
    /// ISR subscription number for CHF slips, dashed form (e.g. `01-162-8`).
    pub isr_subscription_chf: Option<String>,
    /// ISR subscription number for EUR slips, dashed form.
    pub isr_subscription_eur: Option<String>,
    /// Dedicated QR-IBAN, for accounts keeping a separate regular IBAN.
    pub qr_iban: Option<String>,
}

impl BankAccount {
    pub fn new(acc_number: impl Into<String>, partner: Partner) -> Self {
        Self {
            acc_number: acc_number.into(),
            holder_name: None,
            partner,
            postal: None,
            isr_subscription_chf: None,
            isr_subscription_eur: None,
            qr_iban: None,
        }
    }

    pub fn account_type(&self) -> AccountType {
        classify_account(&self.acc_number)
    }

    /// The account number as used in payloads: postal numbers stay
    /// untouched, everything else is space-stripped and uppercased.
    pub fn sanitized_number(&self) -> String {
        match self.account_type() {
            AccountType::Postal => self.acc_number.clone(),
            _ => iban::normalize_iban(&self.acc_number),
        }
    }

    /// Whether payments to this account must carry a QR reference, either
    /// because the account number itself is a QR-IBAN or because a dedicated
    /// one is configured.
    pub fn is_qr_iban(&self) -> bool {
        if self.account_type() == AccountType::Iban && iban::is_qr_iban(&self.sanitized_number()) {
            return true;
        }
        self.qr_iban.is_some()
    }

    /// The postal account number for this account, prettified: the stored
    /// one when it validates, otherwise derived from the account number the
    /// way the host's form would on change — read out of a PostFinance
    /// IBAN, or taken from ahead of the holder-name suffix on a postal
    /// number.
    pub fn derived_postal(&self) -> Option<String> {
        if let Some(stored) = self.postal.as_deref() {
            if postal::is_postal_account(stored) {
                return Some(postal::format_postal_account(stored));
            }
        }
        match self.account_type() {
            AccountType::Iban => iban::postal_account_from_iban(&self.acc_number),
            AccountType::Postal => {
                let number = self.acc_number.split(' ').next().unwrap_or("");
                postal::is_postal_account(number).then(|| number.to_string())
            }
            AccountType::Bank => None,
        }
    }

    /// The ISR subscription number matching `currency`, if any. ISR slips
    /// only exist for CHF and EUR.
    pub fn isr_subscription(&self, currency: &str) -> Option<&str> {
        match currency {
            "CHF" => self.isr_subscription_chf.as_deref(),
            "EUR" => self.isr_subscription_eur.as_deref(),
            _ => None,
        }
    }
}
