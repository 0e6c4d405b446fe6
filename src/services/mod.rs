//! Service layer for MyLedger
//!
//! Business logic over the ledger data model. External callers (UI layers,
//! embedding applications) go through this module's operations only.

pub mod ledger;

pub use ledger::LedgerService;
