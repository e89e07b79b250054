//! ISR payment slips (Inpayment Slip with Reference).
//!
//! Generates the 27-digit structured reference printed on Swiss ISR
//! payment slips and the optical line parsed positionally by scanners.

mod optical;
mod reference;

pub use optical::*;
pub use reference::*;
