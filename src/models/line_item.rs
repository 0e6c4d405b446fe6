//! Line item models
//!
//! The two flavors of budget entry: static items are recurring bills and
//! income with a per-month settlement flag; variable items are discretionary
//! spending categories whose totals reset each month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A recurring bill or income entry, carried month to month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLineItem {
    /// Item name, unique within a month's static list
    pub name: String,

    /// Signed amount; income positive, bills negative
    #[serde(default)]
    pub amount: Money,

    /// Whether this item has been settled for the month
    #[serde(default)]
    pub paid: bool,
}

impl StaticLineItem {
    /// Create a new, unpaid static line item
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            paid: false,
        }
    }

    /// Clone this item for the next month: amount persists, `paid` resets
    ///
    /// The settlement flag is a period-scoped fact; the name and amount are
    /// configuration that tends to repeat.
    pub fn carry_forward(&self) -> Self {
        Self::new(self.name.clone(), self.amount)
    }
}

impl fmt::Display for StaticLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.paid { "paid" } else { "due" };
        write!(f, "{}: {} ({})", self.name, self.amount, mark)
    }
}

/// A discretionary spending category, re-zeroed each month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableLineItem {
    /// Item name, unique within a month's variable list
    pub name: String,

    /// Signed spend total for the month
    #[serde(default)]
    pub amount: Money,
}

impl VariableLineItem {
    /// Create a new variable line item with a zero total
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Money::zero(),
        }
    }

    /// Create a variable line item with a known total
    pub fn with_amount(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Clone this item for the next month: the category persists, its total resets
    pub fn carry_forward(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl fmt::Display for VariableLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_static_item() {
        let rent = StaticLineItem::new("Rent", Money::from_dollars(-1975));
        assert_eq!(rent.name, "Rent");
        assert_eq!(rent.amount, Money::from_dollars(-1975));
        assert!(!rent.paid);
    }

    #[test]
    fn test_static_carry_forward_resets_paid() {
        let mut rent = StaticLineItem::new("Rent", Money::from_dollars(-1975));
        rent.paid = true;

        let next = rent.carry_forward();
        assert_eq!(next.name, "Rent");
        assert_eq!(next.amount, Money::from_dollars(-1975));
        assert!(!next.paid);
    }

    #[test]
    fn test_new_variable_item() {
        let amazon = VariableLineItem::new("Amazon");
        assert_eq!(amazon.name, "Amazon");
        assert!(amazon.amount.is_zero());
    }

    #[test]
    fn test_variable_carry_forward_resets_amount() {
        let amazon = VariableLineItem::with_amount("Amazon", Money::from_dollars(-120));

        let next = amazon.carry_forward();
        assert_eq!(next.name, "Amazon");
        assert!(next.amount.is_zero());
    }

    #[test]
    fn test_display() {
        let mut rent = StaticLineItem::new("Rent", Money::from_dollars(-1975));
        assert_eq!(rent.to_string(), "Rent: -$1975.00 (due)");
        rent.paid = true;
        assert_eq!(rent.to_string(), "Rent: -$1975.00 (paid)");
    }

    #[test]
    fn test_serialization() {
        let rent = StaticLineItem::new("Rent", Money::from_dollars(-1975));
        let json = serde_json::to_string(&rent).unwrap();
        let deserialized: StaticLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(rent, deserialized);

        // Missing optional fields fall back to defaults
        let sparse: StaticLineItem = serde_json::from_str(r#"{"name": "Rent"}"#).unwrap();
        assert!(sparse.amount.is_zero());
        assert!(!sparse.paid);
    }
}
