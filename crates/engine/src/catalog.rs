//! Built-in budget categories and their default line items.
use crate::{LineItem, SectionLedger, Sign};

/// Static description of a category used to build its ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    pub sign: Sign,
    pub items: &'static [&'static str],
}

impl CategorySpec {
    /// Builds a fresh ledger with every default amount at zero.
    pub fn ledger(&self) -> SectionLedger {
        let defaults = self
            .items
            .iter()
            .map(|name| LineItem::default_item(*name))
            .collect();
        SectionLedger::new(self.name, self.sign, defaults)
    }
}

pub const LIVING_EXPENSES: CategorySpec = CategorySpec {
    name: "Living Expenses",
    sign: Sign::Negative,
    items: &[
        "Mortgage/Rent",
        "Home Repairs/Maintenance",
        "Utilities",
        "Groceries",
        "Personal Goods",
        "Entertainment/Dining",
        "Clothing",
        "Gifts",
        "Transportation",
        "Child Care",
        "Cable & Internet",
        "Cell Phone",
        "Homeowner Fees",
        "Hobbies",
        "Children's Activities",
    ],
};

pub const INSURANCE: CategorySpec = CategorySpec {
    name: "Insurance",
    sign: Sign::Negative,
    items: &[
        "Auto Insurance",
        "Life Insurance",
        "Disability",
        "Long Term Care",
        "Medical",
        "Dental",
        "Vision",
        "Flexible Spending Account",
        "Liability Coverage",
    ],
};

pub const SAVINGS_INVESTMENTS: CategorySpec = CategorySpec {
    name: "Savings Investments",
    sign: Sign::Negative,
    items: &[
        "Savings",
        "Non-Retirement Accounts",
        "Education (529, ESA, UTMA)",
        "IRA(s)",
        "401(k)/403(b)/457",
        "SEP/SIMPLE",
        "Thrift Savings",
    ],
};

pub const CONSUMER_DEBT: CategorySpec = CategorySpec {
    name: "Consumer Debt",
    sign: Sign::Negative,
    items: &[
        "Advance Pay",
        "Credit Card(s)",
        "Auto Loan(s)",
        "Student Loan(s)",
        "Personal Loan(s)",
    ],
};

pub const GROSS_INCOME: CategorySpec = CategorySpec {
    name: "Gross Income",
    sign: Sign::Positive,
    items: &["Monthly Income", "Monthly Income (Spouse)"],
};

pub const OTHER_NET_INCOME: CategorySpec = CategorySpec {
    name: "Other Net Income",
    sign: Sign::Positive,
    items: &[
        "Rental Income",
        "Retirement Income",
        "Child Support",
        "Disability",
        "Investment Income",
        "Federal Taxes",
        "State/Local Taxes",
        "Social Security/Payroll",
        "Federal Taxes (Spouse)",
        "State/Local Taxes (Spouse)",
        "Social Security/Payroll (Spouse)",
    ],
};

/// Categories in tab order.
pub const STANDARD: [CategorySpec; 6] = [
    LIVING_EXPENSES,
    INSURANCE,
    SAVINGS_INVESTMENTS,
    CONSUMER_DEBT,
    GROSS_INCOME,
    OTHER_NET_INCOME,
];
