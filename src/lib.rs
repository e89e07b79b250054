//! # zahlteil
//!
//! Swiss payment reference library: postal account numbers, ISR payment
//! slips, QR-IBAN handling, and QR-bill payload construction.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every function is a pure, synchronous mapping from value types to value
//! types; persistence and rendering stay with the calling system.
//!
//! ## Quick Start
//!
//! ```rust
//! use zahlteil::core::*;
//!
//! // Postal account numbers carry a recursive modulo-10 check digit.
//! validate_postal_account("01-162-8").unwrap();
//! assert_eq!(format_postal_account("010001628"), "01-162-8");
//!
//! // QR-IBANs are ordinary-looking IBANs with a reserved institution id.
//! assert!(is_qr_iban("CH4431999123000889012"));
//! assert!(!is_qr_iban("CH0909000000100080607"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksums, postal accounts, IBAN/QR-IBAN, account types |
//! | `isr` | ISR reference generation and optical line |
//! | `qr` | QR-bill payload, barcode URL, pre-render validation |
//! | `payment` | Vendor payment grouping by structured reference |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "isr")]
pub mod isr;

#[cfg(feature = "qr")]
pub mod qr;

#[cfg(feature = "payment")]
pub mod payment;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
