use engine::{
    Budget, Column, EngineError, Money, Sign, ViewEvent,
    catalog::{self, CategorySpec},
};

fn index_of(budget: &Budget, name: &str) -> usize {
    budget
        .category_names()
        .iter()
        .position(|category| *category == name)
        .expect("category missing from the standard catalog")
}

fn edit_amount(budget: &mut Budget, category: usize, row: usize, text: &str) -> engine::Outcome {
    budget
        .apply(
            category,
            ViewEvent::CellEdited {
                row,
                column: Column::Amount,
                text: text.to_string(),
            },
        )
        .unwrap()
}

fn assert_ledgers_consistent(budget: &Budget) {
    for section in budget.sections() {
        let defaults: Money = section.defaults().iter().map(|i| i.amount).sum();
        let customs: Money = section.customs().iter().map(|i| i.amount).sum();
        assert_eq!(
            section.total(),
            section.sign().apply(defaults) + section.sign().apply(customs),
            "{} total drifted",
            section.name()
        );
        assert_eq!(
            budget.summary().total_of(section.name()),
            Some(section.total())
        );
    }
    let sum: Money = budget.summary().totals().iter().map(|(_, t)| *t).sum();
    assert_eq!(budget.summary().grand_total(), sum);
}

#[test]
fn standard_budget_registers_every_category_at_zero() {
    let budget = Budget::standard();

    let names: Vec<_> = budget
        .summary()
        .totals()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    let expected: Vec<_> = catalog::STANDARD.iter().map(|spec| spec.name).collect();
    assert_eq!(names, expected);
    assert_eq!(budget.summary().grand_total(), Money::ZERO);
}

#[test]
fn insurance_custom_entry_scenario() {
    let mut budget = Budget::standard();
    let insurance = index_of(&budget, "Insurance");

    edit_amount(&mut budget, insurance, 0, "60");
    edit_amount(&mut budget, insurance, 5, "40");
    assert_eq!(budget.section(insurance).unwrap().total(), Money::from_major(-100));

    let added = budget.apply(insurance, ViewEvent::AddRowRequested).unwrap();
    let rows = added.refresh.unwrap();
    let new_index = rows.len() - 1;
    assert!(rows[new_index].editable_name);
    assert_eq!(added.notification.total, Money::from_major(-100));

    let outcome = edit_amount(&mut budget, insurance, new_index, "50");
    let (row, snapshot) = outcome.updated.clone().unwrap();
    assert_eq!(row, new_index);
    assert_eq!(snapshot.amount.to_string(), "50.00");
    assert_eq!(outcome.notification.total, Money::from_major(-150));
    assert_eq!(budget.summary().grand_total(), Money::from_major(-150));
}

#[test]
fn gross_income_flows_into_grand_total() {
    let mut budget = Budget::standard();
    let income = index_of(&budget, "Gross Income");
    assert_eq!(budget.section(income).unwrap().sign(), Sign::Positive);

    edit_amount(&mut budget, income, 0, "3000");
    let outcome = edit_amount(&mut budget, income, 1, "1000");

    assert_eq!(outcome.notification.category, "Gross Income");
    assert_eq!(outcome.notification.total, Money::from_major(4000));
    assert_eq!(
        budget.summary().total_of("Gross Income"),
        Some(Money::from_major(4000))
    );
    assert_eq!(budget.summary().grand_total(), Money::from_major(4000));

    let living = index_of(&budget, "Living Expenses");
    edit_amount(&mut budget, living, 0, "1500.50");
    assert_eq!(budget.summary().grand_total(), Money::new(2499_50));
}

#[test]
fn invalid_amount_replaces_previous_value() {
    let mut budget = Budget::standard();
    let debt = index_of(&budget, "Consumer Debt");

    edit_amount(&mut budget, debt, 1, "250");
    edit_amount(&mut budget, debt, 2, "100");
    assert_eq!(budget.summary().grand_total(), Money::from_major(-350));

    let first = edit_amount(&mut budget, debt, 1, "abc");
    assert!(first.coerced);
    let (_, snapshot) = first.updated.clone().unwrap();
    assert_eq!(snapshot.name, "Credit Card(s)");
    assert_eq!(snapshot.amount.to_string(), "0.00");
    assert_eq!(first.notification.total, Money::from_major(-100));

    let second = edit_amount(&mut budget, debt, 1, "abc");
    assert_eq!(second, first);
    assert_eq!(budget.summary().grand_total(), Money::from_major(-100));
}

#[test]
fn removing_default_rows_is_a_no_op() {
    let mut budget = Budget::standard();
    let savings = index_of(&budget, "Savings Investments");
    let before = budget.section(savings).unwrap().defaults().to_vec();

    let outcome = budget
        .apply(savings, ViewEvent::RemoveRowsRequested((0..before.len()).collect()))
        .unwrap();

    assert_eq!(outcome.refresh.unwrap().len(), before.len());
    assert_eq!(budget.section(savings).unwrap().defaults(), before.as_slice());
}

#[test]
fn default_names_cannot_be_edited_through_the_view() {
    let mut budget = Budget::standard();
    let living = index_of(&budget, "Living Expenses");

    budget
        .apply(
            living,
            ViewEvent::CellEdited {
                row: 0,
                column: Column::Name,
                text: "Yacht".to_string(),
            },
        )
        .unwrap();

    assert_eq!(
        budget.section(living).unwrap().defaults()[0].name,
        "Mortgage/Rent"
    );
}

#[test]
fn unknown_category_is_reported() {
    let mut budget = Budget::standard();
    let err = budget.apply(42, ViewEvent::AddRowRequested).unwrap_err();
    assert_eq!(err, EngineError::UnknownCategory(42));
}

#[test]
fn every_sequence_keeps_totals_consistent() {
    let mut budget = Budget::standard();

    for category in 0..budget.sections().len() {
        budget.apply(category, ViewEvent::AddRowRequested).unwrap();
        budget.apply(category, ViewEvent::AddRowRequested).unwrap();
        let len = budget.section(category).unwrap().len();

        edit_amount(&mut budget, category, 0, "10.10");
        edit_amount(&mut budget, category, len - 1, "20,20");
        edit_amount(&mut budget, category, len - 2, "bogus");
        assert_ledgers_consistent(&budget);

        budget
            .apply(category, ViewEvent::RemoveRowsRequested(vec![len - 1, 0]))
            .unwrap();
        assert_ledgers_consistent(&budget);
    }

    // Living, insurance, savings, debt lose 10.10 each; both income tabs gain it.
    assert_eq!(budget.summary().grand_total(), Money::new(-2020));
}

#[test]
fn builder_accepts_custom_catalog() {
    const CHORES: CategorySpec = CategorySpec {
        name: "Chores",
        sign: Sign::Negative,
        items: &["Laundry"],
    };

    let mut budget = Budget::builder()
        .category(CHORES)
        .category(catalog::GROSS_INCOME)
        .build();

    edit_amount(&mut budget, 0, 0, "25");
    edit_amount(&mut budget, 1, 0, "100");
    assert_eq!(budget.category_names(), vec!["Chores", "Gross Income"]);
    assert_eq!(budget.summary().grand_total(), Money::from_major(75));
}
