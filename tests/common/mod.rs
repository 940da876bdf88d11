// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use expense_tracker::{Category, ExpenseTrackerModel, ModelListener, Transaction};

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Helper to build a valid transaction
pub fn expense(amount_cents: i64, category: Category) -> Transaction {
    Transaction::new(amount_cents, category).unwrap()
}

/// Listener that counts how many times it was notified and keeps the
/// transaction count it observed on the last call.
#[derive(Default)]
pub struct CountingListener {
    calls: Cell<usize>,
    last_count: Cell<Option<usize>>,
}

impl CountingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_count(&self) -> Option<usize> {
        self.last_count.get()
    }
}

impl ModelListener for CountingListener {
    fn update(&self, model: &ExpenseTrackerModel) {
        self.calls.set(self.calls.get() + 1);
        self.last_count.set(Some(model.transaction_count()));
    }
}

/// Listener that appends its name to a shared log, to check which listeners
/// ran without depending on the order they ran in.
pub struct NamedListener {
    pub name: &'static str,
    pub log: Rc<RefCell<Vec<&'static str>>>,
}

impl ModelListener for NamedListener {
    fn update(&self, _model: &ExpenseTrackerModel) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Test fixture: model preloaded with one transaction per category
pub fn model_with_categories() -> (ExpenseTrackerModel, Vec<Transaction>) {
    let mut model = ExpenseTrackerModel::new();
    let transactions: Vec<Transaction> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| expense(1000 * (i as i64 + 1), category))
        .collect();
    for transaction in &transactions {
        model.add_transaction(transaction.clone()).unwrap();
    }
    (model, transactions)
}
