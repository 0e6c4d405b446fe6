//! Ledger service
//!
//! The operational layer over the ledger: month creation with carry-forward,
//! name-keyed item mutation and queries, and balance aggregation. This is
//! the sole mutation surface; callers must not edit the item lists directly.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, MonthKey, Money, StaticLineItem, VariableLineItem};

/// Service owning the ledger and enforcing its invariants
///
/// Always constructed explicitly: empty via [`LedgerService::new`], or from
/// a saved file via [`crate::serialize::Serializer::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    /// Create a service over an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing ledger (used by the serializer)
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Read-only access to the underlying ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // === Month operations ===

    /// Add a month to the ledger, seeding it from the preceding month
    ///
    /// Idempotent: adding a month that already exists changes nothing.
    /// Static items carry forward with their amounts but an unset `paid`
    /// flag; variable categories carry forward with zero totals. A month
    /// with no predecessor starts empty.
    pub fn add_month(&mut self, month: MonthKey) {
        if self.ledger.contains(month) {
            return;
        }

        let seeded = match self.ledger.budget(month.prev()) {
            Some(prev) => prev.carry_forward(),
            None => Default::default(),
        };
        self.ledger.insert_if_absent(month, seeded);
    }

    /// All months present in the ledger, most recent first
    pub fn months_available(&self) -> Vec<MonthKey> {
        self.ledger.keys().rev().copied().collect()
    }

    /// Total assets and liabilities for a month
    ///
    /// Positive amounts accumulate into assets; negative amounts accumulate
    /// as their absolute value into liabilities. Zero-amount items count
    /// toward neither. Returns `None` when the month has no budget.
    pub fn assets_and_liabilities(&self, month: MonthKey) -> Option<(Money, Money)> {
        let budget = self.ledger.budget(month)?;

        let mut assets = Money::zero();
        let mut liabilities = Money::zero();
        let amounts = budget
            .static_items
            .iter()
            .map(|s| s.amount)
            .chain(budget.variable_items.iter().map(|v| v.amount));

        for amount in amounts {
            if amount.is_positive() {
                assets += amount;
            } else if amount.is_negative() {
                liabilities += amount.abs();
            }
        }

        Some((assets, liabilities))
    }

    /// The live item lists for a month; two empty slices if the month is absent
    ///
    /// Read-only by design: mutate through the named operations so name
    /// uniqueness holds.
    pub fn static_and_variable(
        &self,
        month: MonthKey,
    ) -> (&[StaticLineItem], &[VariableLineItem]) {
        match self.ledger.budget(month) {
            Some(budget) => (&budget.static_items, &budget.variable_items),
            None => (&[], &[]),
        }
    }

    // === Static item operations ===

    /// Append a static item to a month's budget
    ///
    /// Fails without mutating anything if an item of the same name already
    /// exists in that month's static list.
    pub fn add_static_to_month(
        &mut self,
        month: MonthKey,
        item: StaticLineItem,
    ) -> LedgerResult<()> {
        validate_name(&item.name)?;

        // Check for duplicate name
        if let Some(budget) = self.ledger.budget(month) {
            if budget.static_item(&item.name).is_some() {
                return Err(LedgerError::duplicate_static(item.name));
            }
        }

        self.ledger.budget_or_default(month).static_items.push(item);
        Ok(())
    }

    /// Look up a static item by name
    pub fn get_static(&self, month: MonthKey, name: &str) -> Option<&StaticLineItem> {
        self.ledger.budget(month)?.static_item(name)
    }

    /// Update a static item in place by name
    ///
    /// Each supplied field applies independently; a supplied amount always
    /// replaces, including zero. Silently does nothing if the month or name
    /// is unknown — the permissive editing contract.
    pub fn update_static(
        &mut self,
        month: MonthKey,
        name: &str,
        amount: Option<Money>,
        paid: Option<bool>,
    ) {
        if let Some(item) = self
            .ledger
            .budget_mut(month)
            .and_then(|budget| budget.static_item_mut(name))
        {
            if let Some(amount) = amount {
                item.amount = amount;
            }
            if let Some(paid) = paid {
                item.paid = paid;
            }
        }
    }

    // === Variable item operations ===

    /// Append a variable item to a month's budget
    ///
    /// Fails without mutating anything if an item of the same name already
    /// exists in that month's variable list.
    pub fn add_variable_to_month(
        &mut self,
        month: MonthKey,
        item: VariableLineItem,
    ) -> LedgerResult<()> {
        validate_name(&item.name)?;

        // Check for duplicate name
        if let Some(budget) = self.ledger.budget(month) {
            if budget.variable_item(&item.name).is_some() {
                return Err(LedgerError::duplicate_variable(item.name));
            }
        }

        self.ledger
            .budget_or_default(month)
            .variable_items
            .push(item);
        Ok(())
    }

    /// Look up a variable item by name
    pub fn get_variable(&self, month: MonthKey, name: &str) -> Option<&VariableLineItem> {
        self.ledger.budget(month)?.variable_item(name)
    }

    /// Update a variable item's total in place by name
    ///
    /// A supplied amount always replaces, including zero. Silently does
    /// nothing if the month or name is unknown.
    pub fn update_variable(&mut self, month: MonthKey, name: &str, amount: Option<Money>) {
        if let Some(item) = self
            .ledger
            .budget_mut(month)
            .and_then(|budget| budget.variable_item_mut(name))
        {
            if let Some(amount) = amount {
                item.amount = amount;
            }
        }
    }
}

/// Reject blank item names before they enter a list
fn validate_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Line item name cannot be empty".into(),
        ));
    }
    Ok(())
}
