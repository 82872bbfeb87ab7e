use crate::Money;

/// Where a line item comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Shipped with the category: the name is fixed and the row cannot be removed.
    Default,
    /// Added by the user during the session: name and amount are editable and
    /// the row can be removed.
    Custom,
}

/// A named monthly amount inside a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub amount: Money,
    pub origin: Origin,
}

impl LineItem {
    /// Default item with a zero amount.
    #[must_use]
    pub fn default_item(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Money::ZERO,
            origin: Origin::Default,
        }
    }

    /// Blank custom item, as created by the add-row action.
    #[must_use]
    pub fn custom() -> Self {
        Self {
            name: String::new(),
            amount: Money::ZERO,
            origin: Origin::Custom,
        }
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.origin == Origin::Custom
    }
}

/// Rendered snapshot of a line item handed to the table view.
///
/// The view never holds references into ledger storage, only these copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub amount: Money,
    pub editable_name: bool,
}

impl From<&LineItem> for Row {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            amount: item.amount,
            editable_name: item.is_custom(),
        }
    }
}
