//! Wiring between the table views, the category ledgers and the totals.
//!
//! The view sends a [`ViewEvent`] for a category; [`Budget::apply`] runs the
//! matching ledger operation and delivers the resulting [`TotalChanged`] to the
//! [`SummaryAggregator`] before returning, so the grand total is consistent
//! with the latest edit as soon as control goes back to the event loop.
use crate::{
    CategorySpec, EngineError, ResultEngine, Row, SectionLedger, SummaryAggregator, TotalChanged,
    catalog,
};

/// Table column targeted by a cell edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Name,
    Amount,
}

/// Inbound events from a category table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    CellEdited {
        row: usize,
        column: Column,
        text: String,
    },
    AddRowRequested,
    RemoveRowsRequested(Vec<usize>),
}

/// What the view has to do after an event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Full row set, present after a structural change.
    pub refresh: Option<Vec<Row>>,
    /// Snapshot of the edited row after a cell edit. For an amount edit this
    /// is the corrected value (zero after a coercion).
    pub updated: Option<(usize, Row)>,
    /// `true` when the amount text did not parse and was reset to zero.
    pub coerced: bool,
    pub notification: TotalChanged,
}

#[derive(Debug)]
pub struct Budget {
    sections: Vec<SectionLedger>,
    summary: SummaryAggregator,
}

impl Budget {
    /// Return a builder for `Budget`.
    pub fn builder() -> BudgetBuilder {
        BudgetBuilder::default()
    }

    /// Budget with the built-in categories.
    pub fn standard() -> Self {
        Self::builder().categories(catalog::STANDARD).build()
    }

    pub fn sections(&self) -> &[SectionLedger] {
        &self.sections
    }

    pub fn section(&self, category: usize) -> Option<&SectionLedger> {
        self.sections.get(category)
    }

    pub fn summary(&self) -> &SummaryAggregator {
        &self.summary
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.sections.iter().map(SectionLedger::name).collect()
    }

    /// Applies a view event to the category at `category` and propagates the
    /// new total to the summary.
    pub fn apply(&mut self, category: usize, event: ViewEvent) -> ResultEngine<Outcome> {
        let section = self
            .sections
            .get_mut(category)
            .ok_or(EngineError::UnknownCategory(category))?;

        let outcome = match event {
            ViewEvent::CellEdited {
                row,
                column: Column::Amount,
                text,
            } => {
                let edit = section.set_amount(row, &text);
                Outcome {
                    refresh: None,
                    updated: section.item(row).map(|item| (row, Row::from(item))),
                    coerced: edit.coerced,
                    notification: edit.notification,
                }
            }
            ViewEvent::CellEdited {
                row,
                column: Column::Name,
                text,
            } => {
                let notification = section.set_name(row, &text);
                Outcome {
                    refresh: None,
                    updated: section.item(row).map(|item| (row, Row::from(item))),
                    coerced: false,
                    notification,
                }
            }
            ViewEvent::AddRowRequested => {
                let notification = section.add_entry();
                Outcome {
                    refresh: Some(section.rows()),
                    updated: None,
                    coerced: false,
                    notification,
                }
            }
            ViewEvent::RemoveRowsRequested(rows) => {
                let notification = section.remove_entries(&rows);
                Outcome {
                    refresh: Some(section.rows()),
                    updated: None,
                    coerced: false,
                    notification,
                }
            }
        };

        self.summary.on_total_changed(&outcome.notification);
        Ok(outcome)
    }
}

/// Builder for [`Budget`]: collects the categories, then creates one ledger
/// per category and registers all of them with the summary.
#[derive(Debug, Default)]
pub struct BudgetBuilder {
    categories: Vec<CategorySpec>,
}

impl BudgetBuilder {
    pub fn category(mut self, spec: CategorySpec) -> Self {
        self.categories.push(spec);
        self
    }

    pub fn categories(mut self, specs: impl IntoIterator<Item = CategorySpec>) -> Self {
        self.categories.extend(specs);
        self
    }

    pub fn build(self) -> Budget {
        let mut summary = SummaryAggregator::new();
        let sections: Vec<SectionLedger> = self
            .categories
            .iter()
            .map(|spec| {
                summary.register_category(spec.name);
                spec.ledger()
            })
            .collect();

        for section in &sections {
            summary.on_category_total_changed(section.name(), section.total());
        }

        Budget { sections, summary }
    }
}
