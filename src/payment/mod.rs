//! Vendor payment grouping by structured reference.
//!
//! A structured ISR reference identifies exactly one payment at the bank.
//! Grouping vendor bills by reference keeps one reference from appearing
//! across several payments of a batch export, and keeps the payment
//! communication down to the single shared reference.

mod grouping;

pub use grouping::*;
