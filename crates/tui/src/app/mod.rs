use std::{collections::BTreeSet, time::Duration};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Budget, Column, Currency, Money, Outcome, Row, ViewEvent};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, KeyMode},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Category(usize),
    Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    Browse,
    EditAmount { row: usize },
    EditName { row: usize },
}

/// Rendered snapshot of one category table plus its local UI state.
#[derive(Debug)]
pub struct SectionView {
    pub title: String,
    pub rows: Vec<Row>,
    pub total: Money,
    pub selected: usize,
    pub marked: BTreeSet<usize>,
    pub mode: SectionMode,
    pub input: String,
}

impl SectionView {
    fn new(title: &str, rows: Vec<Row>, total: Money) -> Self {
        Self {
            title: title.to_string(),
            rows,
            total,
            selected: 0,
            marked: BTreeSet::new(),
            mode: SectionMode::Browse,
            input: String::new(),
        }
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.rows.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    fn selected_row(&self) -> Option<&Row> {
        self.rows.get(self.selected)
    }

    /// Rows targeted by a removal: the marked rows, or the selected custom row.
    fn removal_targets(&self) -> Vec<usize> {
        if !self.marked.is_empty() {
            return self.marked.iter().copied().collect();
        }
        match self.selected_row() {
            Some(row) if row.editable_name => vec![self.selected],
            _ => Vec::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode != SectionMode::Browse
    }
}

#[derive(Debug)]
pub struct AppState {
    pub tab: Tab,
    pub sections: Vec<SectionView>,
    pub totals: Vec<(String, Money)>,
    pub grand_total: Money,
    pub currency: Currency,
    pub status: Option<String>,
}

impl AppState {
    pub fn tab_count(&self) -> usize {
        self.sections.len() + 1
    }

    pub fn tab_index(&self) -> usize {
        match self.tab {
            Tab::Category(index) => index,
            Tab::Totals => self.sections.len(),
        }
    }

    fn tab_at(&self, index: usize) -> Tab {
        if index < self.sections.len() {
            Tab::Category(index)
        } else {
            Tab::Totals
        }
    }

    pub fn active_section(&self) -> Option<&SectionView> {
        match self.tab {
            Tab::Category(index) => self.sections.get(index),
            Tab::Totals => None,
        }
    }

    fn active_section_mut(&mut self) -> Option<(usize, &mut SectionView)> {
        match self.tab {
            Tab::Category(index) => self.sections.get_mut(index).map(|view| (index, view)),
            Tab::Totals => None,
        }
    }

    pub fn key_mode(&self) -> KeyMode {
        match self.active_section() {
            Some(view) if view.is_editing() => KeyMode::Editing,
            _ => KeyMode::Browse,
        }
    }
}

pub struct App {
    config: AppConfig,
    budget: Budget,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_budget(config, Budget::standard())
    }

    pub fn with_budget(config: AppConfig, budget: Budget) -> Self {
        let sections = budget
            .sections()
            .iter()
            .map(|section| SectionView::new(section.name(), section.rows(), section.total()))
            .collect();
        let state = AppState {
            tab: Tab::Category(0),
            sections,
            totals: budget.summary().totals().to_vec(),
            grand_total: budget.summary().grand_total(),
            currency: config.currency,
            status: None,
        };

        Self {
            config,
            budget,
            state,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
                    _ => {}
                }
            }
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key, self.state.key_mode()) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::NextTab => {
                let next = (self.state.tab_index() + 1) % self.state.tab_count();
                self.switch_tab(next);
            }
            AppAction::PrevTab => {
                let count = self.state.tab_count();
                let prev = (self.state.tab_index() + count - 1) % count;
                self.switch_tab(prev);
            }
            AppAction::JumpTab(index) => {
                if index < self.state.tab_count() {
                    self.switch_tab(index);
                }
            }
            AppAction::Up => {
                if let Some((_, view)) = self.state.active_section_mut() {
                    view.select_prev();
                }
            }
            AppAction::Down => {
                if let Some((_, view)) = self.state.active_section_mut() {
                    view.select_next();
                }
            }
            AppAction::EditAmount => self.begin_amount_edit(),
            AppAction::EditName => self.begin_name_edit(),
            AppAction::AddRow => self.add_row()?,
            AppAction::ToggleMark => self.toggle_mark(),
            AppAction::RemoveRows => self.remove_rows()?,
            AppAction::Submit => self.commit_edit()?,
            AppAction::Cancel => {
                self.state.status = None;
                if let Some((_, view)) = self.state.active_section_mut() {
                    view.mode = SectionMode::Browse;
                    view.input.clear();
                    view.marked.clear();
                }
            }
            AppAction::Backspace => {
                if let Some((_, view)) = self.state.active_section_mut() {
                    view.input.pop();
                }
            }
            AppAction::Input(ch) => {
                if let Some((_, view)) = self.state.active_section_mut() {
                    view.input.push(ch);
                }
            }
            AppAction::None => {}
        }

        Ok(())
    }

    fn switch_tab(&mut self, index: usize) {
        self.state.tab = self.state.tab_at(index);
        self.state.status = None;
        tracing::debug!(tab = index, "switched tab");
    }

    fn begin_amount_edit(&mut self) {
        let Some((_, view)) = self.state.active_section_mut() else {
            return;
        };
        let Some(row) = view.selected_row() else {
            return;
        };
        view.input = if row.amount.is_zero() {
            String::new()
        } else {
            row.amount.to_string()
        };
        view.mode = SectionMode::EditAmount { row: view.selected };
    }

    fn begin_name_edit(&mut self) {
        let Some((_, view)) = self.state.active_section_mut() else {
            return;
        };
        let Some(row) = view.selected_row() else {
            return;
        };
        if !row.editable_name {
            self.state.status = Some("Default item names are fixed.".to_string());
            return;
        }
        view.input = row.name.clone();
        view.mode = SectionMode::EditName { row: view.selected };
    }

    fn commit_edit(&mut self) -> Result<()> {
        let Some((category, view)) = self.state.active_section_mut() else {
            return Ok(());
        };
        let text = std::mem::take(&mut view.input);
        let (row, column) = match view.mode {
            SectionMode::EditAmount { row } => (row, Column::Amount),
            SectionMode::EditName { row } => (row, Column::Name),
            SectionMode::Browse => return Ok(()),
        };
        view.mode = SectionMode::Browse;

        self.dispatch(category, ViewEvent::CellEdited { row, column, text })
    }

    fn add_row(&mut self) -> Result<()> {
        let Some((category, _)) = self.state.active_section_mut() else {
            return Ok(());
        };
        self.dispatch(category, ViewEvent::AddRowRequested)?;

        if let Some(view) = self.state.sections.get_mut(category) {
            view.selected = view.rows.len().saturating_sub(1);
        }
        Ok(())
    }

    fn toggle_mark(&mut self) {
        let Some((_, view)) = self.state.active_section_mut() else {
            return;
        };
        let selected = view.selected;
        if !view.selected_row().is_some_and(|row| row.editable_name) {
            return;
        }
        if !view.marked.remove(&selected) {
            view.marked.insert(selected);
        }
    }

    fn remove_rows(&mut self) -> Result<()> {
        let Some((category, view)) = self.state.active_section_mut() else {
            return Ok(());
        };
        let targets = view.removal_targets();
        if targets.is_empty() {
            self.state.status = Some("Only custom items can be removed.".to_string());
            return Ok(());
        }
        self.dispatch(category, ViewEvent::RemoveRowsRequested(targets))
    }

    /// Sends an event to the engine and folds the outcome back into the view
    /// snapshot, including the refreshed totals.
    fn dispatch(&mut self, category: usize, event: ViewEvent) -> Result<()> {
        let structural = matches!(
            event,
            ViewEvent::AddRowRequested | ViewEvent::RemoveRowsRequested(_)
        );
        let outcome = self.budget.apply(category, event)?;
        self.apply_outcome(category, outcome);

        if structural {
            tracing::info!(
                category = %self.state.sections[category].title,
                rows = self.state.sections[category].rows.len(),
                "rows changed"
            );
        }
        Ok(())
    }

    fn apply_outcome(&mut self, category: usize, outcome: Outcome) {
        let Outcome {
            refresh,
            updated,
            coerced,
            notification,
        } = outcome;

        if let Some(view) = self.state.sections.get_mut(category) {
            if let Some(rows) = refresh {
                view.rows = rows;
                view.marked.clear();
                view.clamp_selection();
            }
            if let Some((index, row)) = updated
                && let Some(slot) = view.rows.get_mut(index)
            {
                *slot = row;
            }
            view.total = notification.total;
        }

        if coerced {
            tracing::debug!(category = %notification.category, "amount text coerced to zero");
        }

        let summary = self.budget.summary();
        self.state.totals = summary.totals().to_vec();
        self.state.grand_total = summary.grand_total();
        self.state.status = None;
        tracing::debug!(
            category = %notification.category,
            total = %notification.total,
            grand_total = %self.state.grand_total,
            "total propagated"
        );
    }
}
