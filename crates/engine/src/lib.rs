//! Core of the budget analysis tool.
//!
//! Each budget category is a [`SectionLedger`] holding default and custom line
//! items; its signed total is pushed to the [`SummaryAggregator`], which keeps
//! the net monthly savings. [`Budget`] owns both and is the only entry point a
//! user interface needs.
//!
//! ```rust
//! use engine::{Budget, Column, Money, ViewEvent};
//!
//! let mut budget = Budget::standard();
//! let income = budget
//!     .category_names()
//!     .iter()
//!     .position(|name| *name == "Gross Income")
//!     .unwrap();
//!
//! budget
//!     .apply(
//!         income,
//!         ViewEvent::CellEdited {
//!             row: 0,
//!             column: Column::Amount,
//!             text: "4000".to_string(),
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(budget.summary().grand_total(), Money::from_major(4000));
//! ```
pub use budget::{Budget, BudgetBuilder, Column, Outcome, ViewEvent};
pub use catalog::CategorySpec;
pub use currency::Currency;
pub use error::EngineError;
pub use item::{LineItem, Origin, Row};
pub use money::Money;
pub use section::{AmountEdit, SectionLedger, Sign, TotalChanged};
pub use summary::{GRAND_TOTAL_LABEL, SummaryAggregator};

pub mod catalog;

mod budget;
mod currency;
mod error;
mod item;
mod money;
mod section;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
