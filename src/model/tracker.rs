use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::domain::{Cents, Transaction, format_cents};

use super::listener::ListenerSet;
use super::{ModelError, ModelListener};

/// Observable in-memory state of the expense tracker.
///
/// Holds the ordered list of transactions plus the indices of the entries that
/// matched the most recently applied filter. Matched indices always point at
/// valid transactions: they are checked before being stored and cleared
/// whenever the transaction list changes.
///
/// Every successful mutation notifies each registered [`ModelListener`]
/// exactly once before returning. Getters hand out owned copies, never
/// references into internal storage.
///
/// The model is meant for a single owner; it holds `Rc`/`Weak` handles and is
/// therefore neither `Send` nor `Sync`.
#[derive(Default)]
pub struct ExpenseTrackerModel {
    transactions: Vec<Transaction>,
    matched_filter_indices: Vec<usize>,
    listeners: ListenerSet,
}

impl ExpenseTrackerModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Transactions
    // ========================

    /// Append a transaction. Clears the matched filter indices.
    pub fn add_transaction(
        &mut self,
        transaction: impl Into<Option<Transaction>>,
    ) -> Result<(), ModelError> {
        let Some(transaction) = transaction.into() else {
            warn!("rejected missing transaction");
            return Err(ModelError::MissingTransaction);
        };

        debug!(
            id = %transaction.id(),
            amount = %format_cents(transaction.amount_cents()),
            category = %transaction.category(),
            "adding transaction"
        );
        self.transactions.push(transaction);
        self.matched_filter_indices.clear();
        self.state_changed();
        Ok(())
    }

    /// Remove the first transaction equal to `transaction`, if any.
    ///
    /// The matched filter indices are cleared even when nothing was removed,
    /// and listeners are notified either way. Returns whether an entry was removed.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        let position = self.transactions.iter().position(|t| t == transaction);
        if let Some(index) = position {
            self.transactions.remove(index);
            debug!(id = %transaction.id(), index, "removed transaction");
        } else {
            debug!(id = %transaction.id(), "transaction to remove not found");
        }

        self.matched_filter_indices.clear();
        self.state_changed();
        position.is_some()
    }

    /// Snapshot of all transactions in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts.
    pub fn total_cents(&self) -> Cents {
        self.transactions.iter().map(Transaction::amount_cents).sum()
    }

    // ========================
    // Filter matches
    // ========================

    /// Replace the matched filter indices with a copy of `indices`.
    ///
    /// Every index must be below the current number of transactions; on an
    /// empty ledger only an empty list is accepted. Order and duplicates are
    /// kept as given. Nothing changes and no listener runs when validation fails.
    pub fn set_matched_filter_indices(
        &mut self,
        indices: Option<&[usize]>,
    ) -> Result<(), ModelError> {
        let Some(indices) = indices else {
            warn!("rejected missing matched filter indices");
            return Err(ModelError::MissingIndices);
        };

        let len = self.transactions.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            warn!(index, len, "rejected out of range matched filter index");
            return Err(ModelError::IndexOutOfRange { index, len });
        }

        debug!(matched = indices.len(), "setting matched filter indices");
        self.matched_filter_indices = indices.to_vec();
        self.state_changed();
        Ok(())
    }

    /// Copy of the current matched filter indices.
    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_filter_indices.clone()
    }

    /// The transactions the matched filter indices point at, in index order.
    pub fn matched_transactions(&self) -> Vec<Transaction> {
        self.matched_filter_indices
            .iter()
            .filter_map(|&index| self.transactions.get(index).cloned())
            .collect()
    }

    // ========================
    // Listeners
    // ========================

    /// Register a listener for state change notifications.
    ///
    /// Returns true if the listener was present and not registered yet.
    /// The model keeps only a weak handle; the caller owns the listener.
    pub fn register<L: ModelListener + 'static>(&mut self, listener: Option<&Rc<L>>) -> bool {
        let handle = listener.map(|l| -> Rc<dyn ModelListener> { Rc::<L>::clone(l) });
        self.register_dyn(handle.as_ref())
    }

    /// Same as [`register`](Self::register), for listeners already held as
    /// trait objects.
    pub fn register_dyn(&mut self, listener: Option<&Rc<dyn ModelListener>>) -> bool {
        let Some(listener) = listener else {
            return false;
        };
        let added = self.listeners.insert(listener);
        trace!(added, listeners = self.listeners.len(), "listener registration");
        added
    }

    /// Number of distinct registered listeners that are still alive.
    pub fn number_of_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn contains_listener<L: ?Sized>(&self, listener: &Rc<L>) -> bool {
        self.listeners.contains(listener)
    }

    /// Notify every live listener. Order is unspecified.
    /// A panic inside a listener unwinds through the calling mutator.
    fn state_changed(&mut self) {
        let pruned = self.listeners.prune();
        if pruned > 0 {
            trace!(pruned, "pruned dropped listeners");
        }

        let listeners = self.listeners.snapshot();
        trace!(listeners = listeners.len(), "notifying listeners");
        for listener in listeners {
            listener.update(self);
        }
    }
}

impl std::fmt::Debug for ExpenseTrackerModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTrackerModel")
            .field("transactions", &self.transactions)
            .field("matched_filter_indices", &self.matched_filter_indices)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
