pub mod section;
pub mod totals;
