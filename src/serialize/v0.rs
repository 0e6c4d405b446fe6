//! Version 0 document codec
//!
//! The original document shape: an application tag, the version number, and
//! the ledger's months keyed by their `"{year}-{month}"` encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Codec, APPLICATION_TAG};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, MonthBudget, MonthKey};
use crate::services::LedgerService;

/// Schema version this codec owns
pub const VERSION: u32 = 0;

/// The version 0 codec
pub struct CodecV0;

/// Top-level persisted document
#[derive(Serialize, Deserialize)]
struct Document {
    application: String,
    #[serde(default)]
    version: u32,
    ledger: LedgerDoc,
}

/// Persisted ledger body
#[derive(Serialize, Deserialize, Default)]
struct LedgerDoc {
    #[serde(default)]
    months: BTreeMap<String, MonthBudget>,
}

impl Codec for CodecV0 {
    fn version(&self) -> u32 {
        VERSION
    }

    fn encode(&self, data: &LedgerService) -> LedgerResult<serde_json::Value> {
        let months = data
            .ledger()
            .iter()
            .map(|(key, budget)| (key.to_string(), budget.clone()))
            .collect();

        let document = Document {
            application: APPLICATION_TAG.to_string(),
            version: VERSION,
            ledger: LedgerDoc { months },
        };
        Ok(serde_json::to_value(document)?)
    }

    fn decode(&self, document: &serde_json::Value) -> LedgerResult<LedgerService> {
        let document: Document = serde_json::from_value(document.clone())?;

        let mut ledger = Ledger::new();
        for (key, budget) in document.ledger.months {
            let month: MonthKey = key.parse().map_err(|e| {
                LedgerError::Json(format!("Invalid month key in document: {}", e))
            })?;
            ledger.insert_if_absent(month, budget);
        }

        Ok(LedgerService::from_ledger(ledger))
    }
}
