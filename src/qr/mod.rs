//! Swiss QR-bill payload construction.
//!
//! Builds the fixed-order, newline-joined text payload embedded in the QR
//! barcode on Swiss invoices, plus the pre-render validation the host runs
//! before handing the payload to its barcode service.

mod payload;
mod validate;

pub use payload::*;
pub use validate::*;
