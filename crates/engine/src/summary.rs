//! Model of the totals tab.
//!
//! Keeps the latest signed total of every registered category, in
//! registration order, and derives the grand total (net monthly savings) on
//! demand so it can never go stale.
use crate::{Money, TotalChanged};

/// Label of the grand total row.
pub const GRAND_TOTAL_LABEL: &str = "Monthly Savings";

#[derive(Clone, Debug, Default)]
pub struct SummaryAggregator {
    totals: Vec<(String, Money)>,
}

impl SummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `name` is tracked, starting at zero. No-op when already present.
    pub fn register_category(&mut self, name: &str) {
        if self.position(name).is_none() {
            self.totals.push((name.to_string(), Money::ZERO));
        }
    }

    /// Overwrites the stored total of `name`.
    ///
    /// Updates for categories that were never registered are dropped.
    pub fn on_category_total_changed(&mut self, name: &str, value: Money) {
        if let Some(index) = self.position(name) {
            self.totals[index].1 = value;
        }
    }

    /// Convenience wrapper for a ledger notification.
    pub fn on_total_changed(&mut self, notification: &TotalChanged) {
        self.on_category_total_changed(&notification.category, notification.total);
    }

    /// Sum of every stored category total.
    pub fn grand_total(&self) -> Money {
        self.totals.iter().map(|(_, total)| *total).sum()
    }

    /// `(category, total)` rows in registration order.
    pub fn totals(&self) -> &[(String, Money)] {
        &self.totals
    }

    pub fn total_of(&self, name: &str) -> Option<Money> {
        self.position(name).map(|index| self.totals[index].1)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.totals.iter().position(|(category, _)| category == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_sum(summary: &SummaryAggregator) -> Money {
        summary.totals().iter().map(|(_, total)| *total).sum()
    }

    #[test]
    fn register_is_idempotent() {
        let mut summary = SummaryAggregator::new();
        summary.register_category("Insurance");
        summary.on_category_total_changed("Insurance", Money::from_major(-100));
        summary.register_category("Insurance");

        assert_eq!(summary.totals().len(), 1);
        assert_eq!(summary.total_of("Insurance"), Some(Money::from_major(-100)));
    }

    #[test]
    fn unregistered_updates_are_dropped() {
        let mut summary = SummaryAggregator::new();
        summary.register_category("Insurance");
        summary.on_category_total_changed("Hobbies", Money::from_major(-30));

        assert!(!summary.is_registered("Hobbies"));
        assert_eq!(summary.grand_total(), Money::ZERO);
    }

    #[test]
    fn grand_total_tracks_every_update() {
        let mut summary = SummaryAggregator::new();
        for name in ["Living Expenses", "Insurance", "Gross Income"] {
            summary.register_category(name);
        }

        let updates = [
            ("Gross Income", 4000_00),
            ("Insurance", -100_00),
            ("Living Expenses", -2500_00),
            ("Insurance", -150_00),
            ("Gross Income", 4200_00),
            ("Unknown", 1_00),
        ];
        for (name, cents) in updates {
            summary.on_category_total_changed(name, Money::new(cents));
            assert_eq!(summary.grand_total(), stored_sum(&summary));
        }
        assert_eq!(summary.grand_total(), Money::from_major(1550));
    }

    #[test]
    fn totals_keep_registration_order() {
        let mut summary = SummaryAggregator::new();
        summary.register_category("B");
        summary.register_category("A");
        let names: Vec<_> = summary.totals().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
