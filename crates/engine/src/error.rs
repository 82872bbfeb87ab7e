//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] returned when a text cannot be parsed as [`Money`].
//!   Ledgers never surface it: an invalid amount is coerced to zero.
//! - [`UnsupportedCurrency`] returned when a currency code is not one of the
//!   display currencies.
//! - [`UnknownCategory`] returned when a view event targets a category index
//!   the [`Budget`] does not own.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`UnsupportedCurrency`]: EngineError::UnsupportedCurrency
//!  [`UnknownCategory`]: EngineError::UnknownCategory
//!  [`Money`]: super::money::Money
//!  [`Budget`]: super::budget::Budget
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Unknown category index {0}")]
    UnknownCategory(usize),
}
