//! Checksums, postal account numbers, IBAN handling, and shared value types.
//!
//! This module provides the foundational pieces every other feature builds
//! on: the recursive modulo-10 check digit used throughout Swiss payment
//! references, postal account validation and formatting, IBAN normalization
//! with QR-IBAN classification, and the partner / bank account value types.

mod account;
mod checksum;
mod error;
mod iban;
mod postal;

pub use account::*;
pub use checksum::*;
pub use error::*;
pub use iban::*;
pub use postal::*;
