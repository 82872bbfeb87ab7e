//! One budget category and its line items.
//!
//! A [`SectionLedger`] owns two ordered sequences: the category's default items
//! and the custom items added during the session. Row indices address the
//! concatenation `defaults ++ customs`, which is also the order of
//! [`SectionLedger::rows`].
//!
//! Every mutating operation recomputes the signed total and returns the
//! [`TotalChanged`] notification, even when the value did not change.
use std::collections::BTreeSet;

use crate::{LineItem, Money, Row};

/// Direction a category contributes to the monthly savings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Income-type categories.
    Positive,
    /// Expense and debt categories.
    Negative,
}

impl Sign {
    /// Applies the sign to an unsigned sum of amounts.
    #[must_use]
    pub fn apply(self, amount: Money) -> Money {
        match self {
            Sign::Positive => amount,
            Sign::Negative => -amount,
        }
    }
}

/// Notification pushed after every recomputation: `(category_name, signed_total)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalChanged {
    pub category: String,
    pub total: Money,
}

/// Result of an amount edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountEdit {
    /// Value now stored in the row (zero after a coercion).
    pub stored: Money,
    /// `true` when the text did not parse and the amount was reset to zero.
    pub coerced: bool,
    pub notification: TotalChanged,
}

#[derive(Clone, Debug)]
pub struct SectionLedger {
    name: String,
    sign: Sign,
    defaults: Vec<LineItem>,
    customs: Vec<LineItem>,
    total: Money,
}

impl SectionLedger {
    /// Creates a ledger; the total is computed right away.
    pub fn new(name: impl Into<String>, sign: Sign, defaults: Vec<LineItem>) -> Self {
        let mut ledger = Self {
            name: name.into(),
            sign,
            defaults,
            customs: Vec::new(),
            total: Money::ZERO,
        };
        ledger.recompute_total();
        ledger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn defaults(&self) -> &[LineItem] {
        &self.defaults
    }

    pub fn customs(&self) -> &[LineItem] {
        &self.customs
    }

    /// Latest signed total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of data rows (defaults and customs).
    pub fn len(&self) -> usize {
        self.defaults.len() + self.customs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when `index` addresses a custom row.
    pub fn is_custom_row(&self, index: usize) -> bool {
        index >= self.defaults.len() && index < self.len()
    }

    pub fn item(&self, index: usize) -> Option<&LineItem> {
        self.defaults
            .get(index)
            .or_else(|| self.customs.get(index.checked_sub(self.defaults.len())?))
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        let defaults = self.defaults.len();
        if index < defaults {
            self.defaults.get_mut(index)
        } else {
            self.customs.get_mut(index - defaults)
        }
    }

    /// Snapshot of every data row, defaults first.
    pub fn rows(&self) -> Vec<Row> {
        self.defaults
            .iter()
            .chain(self.customs.iter())
            .map(Row::from)
            .collect()
    }

    /// Appends a blank custom entry.
    pub fn add_entry(&mut self) -> TotalChanged {
        self.customs.push(LineItem::custom());
        self.recompute_total()
    }

    /// Removes the custom entries at the given row indices.
    ///
    /// Default rows, out of range indices and duplicates are ignored.
    pub fn remove_entries(&mut self, indices: &[usize]) -> TotalChanged {
        let defaults = self.defaults.len();
        let targets: BTreeSet<usize> = indices
            .iter()
            .filter(|&&index| self.is_custom_row(index))
            .map(|&index| index - defaults)
            .collect();

        for offset in targets.into_iter().rev() {
            self.customs.remove(offset);
        }

        self.recompute_total()
    }

    /// Stores the amount parsed from `raw_text`, or zero if it does not parse.
    ///
    /// An out of range index leaves the items untouched.
    pub fn set_amount(&mut self, index: usize, raw_text: &str) -> AmountEdit {
        let (amount, coerced) = match raw_text.parse::<Money>() {
            Ok(amount) => (amount, false),
            Err(_) => (Money::ZERO, true),
        };

        let stored = match self.item_mut(index) {
            Some(item) => {
                item.amount = amount;
                amount
            }
            None => Money::ZERO,
        };

        AmountEdit {
            stored,
            coerced,
            notification: self.recompute_total(),
        }
    }

    /// Renames a custom entry. Default names are fixed, so those edits are ignored.
    pub fn set_name(&mut self, index: usize, text: &str) -> TotalChanged {
        if self.is_custom_row(index)
            && let Some(item) = self.item_mut(index)
        {
            item.name = text.to_string();
        }
        self.recompute_total()
    }

    /// `sign * sum(amounts)` over every data row.
    pub fn recompute_total(&mut self) -> TotalChanged {
        let sum: Money = self
            .defaults
            .iter()
            .chain(self.customs.iter())
            .map(|item| item.amount)
            .sum();
        self.total = self.sign.apply(sum);

        TotalChanged {
            category: self.name.clone(),
            total: self.total,
        }
    }
}
