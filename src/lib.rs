//! MyLedger - Month-by-month personal budgeting ledger
//!
//! This library provides the core of the MyLedger budgeting application:
//! a user-defined profile of recurring "static" bills and income plus
//! "variable" discretionary spending categories, tracked month by month,
//! with running asset/liability computation and durable save/load to a
//! versioned `.pml` file format. Presentation (windows, dialogs, tables)
//! lives in embedding applications that call into this crate.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Cache-path resolution and the last-opened-file cache
//! - `error`: Custom error types
//! - `models`: Core data models (month keys, line items, budgets, ledger)
//! - `services`: Business logic layer; the sole mutation/query surface
//! - `serialize`: Versioned document codecs and the file serializer
//! - `storage`: Atomic JSON file I/O
//!
//! # Example
//!
//! ```rust
//! use myledger::models::{MonthKey, Money, StaticLineItem};
//! use myledger::services::LedgerService;
//!
//! let mut service = LedgerService::new();
//! let jan = MonthKey::new(2024, 1);
//! service.add_month(jan);
//! service.add_static_to_month(jan, StaticLineItem::new("Rent", Money::from_dollars(-1975)))?;
//!
//! // February inherits Rent with its amount, unpaid, ready to settle again
//! service.add_month(jan.next());
//! # Ok::<(), myledger::LedgerError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod serialize;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
