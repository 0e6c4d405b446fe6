//! Month budget model
//!
//! The set of static and variable line items effective for one calendar
//! month. List order is insertion order and survives serialization.

use serde::{Deserialize, Serialize};

use super::line_item::{StaticLineItem, VariableLineItem};

/// All line items for a single month
///
/// Name uniqueness within each list is enforced at the service boundary,
/// not by this container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBudget {
    /// Recurring bills and income
    #[serde(rename = "static", default)]
    pub static_items: Vec<StaticLineItem>,

    /// Discretionary spending categories
    #[serde(rename = "variable", default)]
    pub variable_items: Vec<VariableLineItem>,
}

impl MonthBudget {
    /// Create an empty month budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a month budget from existing item lists
    pub fn with_items(
        static_items: Vec<StaticLineItem>,
        variable_items: Vec<VariableLineItem>,
    ) -> Self {
        Self {
            static_items,
            variable_items,
        }
    }

    /// Seed the next month's budget from this one
    ///
    /// Item identity carries forward; financial state resets (static `paid`
    /// flags clear, variable totals re-zero).
    pub fn carry_forward(&self) -> Self {
        Self {
            static_items: self.static_items.iter().map(|s| s.carry_forward()).collect(),
            variable_items: self
                .variable_items
                .iter()
                .map(|v| v.carry_forward())
                .collect(),
        }
    }

    /// Find a static item by name
    pub fn static_item(&self, name: &str) -> Option<&StaticLineItem> {
        self.static_items.iter().find(|s| s.name == name)
    }

    /// Find a static item by name, mutably
    pub fn static_item_mut(&mut self, name: &str) -> Option<&mut StaticLineItem> {
        self.static_items.iter_mut().find(|s| s.name == name)
    }

    /// Find a variable item by name
    pub fn variable_item(&self, name: &str) -> Option<&VariableLineItem> {
        self.variable_items.iter().find(|v| v.name == name)
    }

    /// Find a variable item by name, mutably
    pub fn variable_item_mut(&mut self, name: &str) -> Option<&mut VariableLineItem> {
        self.variable_items.iter_mut().find(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn sample_budget() -> MonthBudget {
        MonthBudget::with_items(
            vec![
                StaticLineItem::new("Rent", Money::from_dollars(-1975)),
                StaticLineItem::new("Paycheck", Money::from_dollars(6000)),
            ],
            vec![VariableLineItem::with_amount(
                "Amazon",
                Money::from_dollars(-120),
            )],
        )
    }

    #[test]
    fn test_carry_forward() {
        let mut budget = sample_budget();
        budget.static_items[0].paid = true;

        let next = budget.carry_forward();

        assert_eq!(next.static_items.len(), 2);
        assert_eq!(next.static_items[0].name, "Rent");
        assert_eq!(next.static_items[0].amount, Money::from_dollars(-1975));
        assert!(!next.static_items[0].paid);

        assert_eq!(next.variable_items.len(), 1);
        assert_eq!(next.variable_items[0].name, "Amazon");
        assert!(next.variable_items[0].amount.is_zero());
    }

    #[test]
    fn test_lookup_by_name() {
        let budget = sample_budget();

        assert!(budget.static_item("Rent").is_some());
        assert!(budget.static_item("Amazon").is_none());
        assert!(budget.variable_item("Amazon").is_some());
        assert!(budget.variable_item("Rent").is_none());
    }

    #[test]
    fn test_serialization_preserves_order_and_names() {
        let budget = sample_budget();
        let json = serde_json::to_string(&budget).unwrap();

        // Wire field names match the persisted document shape
        assert!(json.contains("\"static\""));
        assert!(json.contains("\"variable\""));

        let deserialized: MonthBudget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
        assert_eq!(deserialized.static_items[0].name, "Rent");
        assert_eq!(deserialized.static_items[1].name, "Paycheck");
    }
}
