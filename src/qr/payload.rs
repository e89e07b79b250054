use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{normalize_iban, BankAccount, Partner, ZahlteilError};

const QR_TYPE: &str = "SPC";
const QR_VERSION: &str = "0200";
const QR_CODING_TYPE: &str = "1";
const QR_TRAILER: &str = "EPD";
/// Address type marker: combined address elements on two lines.
const COMBINED_ADDRESS: &str = "K";

const NAME_MAX: usize = 71;
const ADDRESS_LINE_MAX: usize = 70;
const MESSAGE_MAX: usize = 140;

/// Number of slots in the payload; fixed by the QR-bill standard, never
/// reordered or omitted.
const FIELD_COUNT: usize = 31;

/// Reference type tag of a QR-bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    /// No reference.
    None,
    /// Structured QR reference (27 digits, modulo-10 check), mandatory for
    /// QR-IBAN accounts.
    Qr,
    /// Creditor reference (ISO 11649).
    Creditor,
}

impl ReferenceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "NON",
            Self::Qr => "QRR",
            Self::Creditor => "SCOR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NON" => Some(Self::None),
            "QRR" => Some(Self::Qr),
            "SCOR" => Some(Self::Creditor),
            _ => None,
        }
    }
}

/// Everything needed to build a QR-bill payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBill {
    /// Creditor bank account; its partner is the creditor.
    pub account: BankAccount,
    pub amount: Decimal,
    /// ISO 4217 currency code, `CHF` or `EUR` for QR-bills.
    pub currency: String,
    pub debtor: Partner,
    pub reference_type: ReferenceType,
    /// Reference value; ignored for [`ReferenceType::None`].
    pub reference: String,
    /// Free-text communication, truncated to 140 characters with `...`.
    pub message: Option<String>,
}

/// Fit a free-text value into a payload slot: newlines collapse to spaces
/// (field values must never contain embedded newlines, or every slot after
/// them shifts for the scanner) and the result is capped at `max` characters.
fn slot_value(s: &str, max: usize) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max)
        .collect()
}

/// The two combined address lines for a partner: street and street2, then
/// zip and city, each capped at 70 characters. Missing components render as
/// empty, so a partner without a street still yields both lines.
pub fn address_lines(partner: &Partner) -> (String, String) {
    let address = &partner.address;
    let line_1 = format!(
        "{} {}",
        address.street.as_deref().unwrap_or(""),
        address.street2.as_deref().unwrap_or("")
    );
    let line_2 = format!(
        "{} {}",
        address.zip.as_deref().unwrap_or(""),
        address.city.as_deref().unwrap_or("")
    );
    (
        slot_value(&line_1, ADDRESS_LINE_MAX),
        slot_value(&line_2, ADDRESS_LINE_MAX),
    )
}

impl QrBill {
    /// The ordered payload slots. Empty string, never omission, stands for
    /// "no value"; the sequence length is fixed at 31.
    pub fn payload_fields(&self) -> Result<Vec<String>, ZahlteilError> {
        if self.account.acc_number.trim().is_empty() {
            return Err(ZahlteilError::MissingField("account.acc_number".to_string()));
        }
        if self.debtor.name.trim().is_empty() {
            return Err(ZahlteilError::MissingField("debtor.name".to_string()));
        }

        // A dedicated QR-IBAN replaces the regular account number.
        let iban = match &self.account.qr_iban {
            Some(qr_iban) => normalize_iban(qr_iban),
            None => self.account.sanitized_number(),
        };
        let creditor = &self.account.partner;
        let creditor_name = self
            .account
            .holder_name
            .as_deref()
            .unwrap_or(&creditor.name);
        let (creditor_line_1, creditor_line_2) = address_lines(creditor);
        let (debtor_line_1, debtor_line_2) = address_lines(&self.debtor);
        let reference = match self.reference_type {
            ReferenceType::None => "",
            _ => self.reference.as_str(),
        };

        let fields = vec![
            QR_TYPE.to_string(),
            QR_VERSION.to_string(),
            QR_CODING_TYPE.to_string(),
            iban,
            // creditor, combined address elements
            COMBINED_ADDRESS.to_string(),
            slot_value(creditor_name, NAME_MAX),
            creditor_line_1,
            creditor_line_2,
            String::new(),
            String::new(),
            creditor.address.country_code.clone().unwrap_or_default(),
            // ultimate creditor block, unused
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("{:.2}", self.amount.round_dp(2)),
            self.currency.clone(),
            // ultimate debtor, combined address elements
            COMBINED_ADDRESS.to_string(),
            slot_value(&self.debtor.name, NAME_MAX),
            debtor_line_1,
            debtor_line_2,
            String::new(),
            String::new(),
            self.debtor.address.country_code.clone().unwrap_or_default(),
            self.reference_type.code().to_string(),
            reference.to_string(),
            self.truncated_message(),
            QR_TRAILER.to_string(),
        ];
        debug_assert_eq!(fields.len(), FIELD_COUNT);
        Ok(fields)
    }

    /// The newline-joined payload ready for barcode rendering. Field values
    /// never contain embedded newlines.
    pub fn payload(&self) -> Result<String, ZahlteilError> {
        Ok(self.payload_fields()?.join("\n"))
    }

    /// Relative URL of the host's barcode rendering service for this bill.
    /// Spaces are query-encoded as `+`, the form the rendering endpoint has
    /// always been fed.
    pub fn barcode_url(&self, width: u32, height: u32) -> Result<String, ZahlteilError> {
        let payload = self.payload()?;
        let value = urlencoding::encode(&payload).replace("%20", "+");
        Ok(format!(
            "/report/barcode/?type=QR&value={value}&width={width}&height={height}&humanreadable=1"
        ))
    }

    fn truncated_message(&self) -> String {
        match self.message.as_deref() {
            Some(message) if message.chars().count() > MESSAGE_MAX => {
                format!("{}...", slot_value(message, MESSAGE_MAX - 3))
            }
            Some(message) => slot_value(message, MESSAGE_MAX),
            None => String::new(),
        }
    }
}
