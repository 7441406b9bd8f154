//! Savings and current account variants sharing one deposit/withdraw interface,
//! plus a transfer operation between any two accounts.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod errors;
pub mod transfer;

/// Account identifier, e.g. `S123`
pub type AccountID = String;
