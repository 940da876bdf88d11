use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::ExpenseTrackerModel;

/// Observer of an [`ExpenseTrackerModel`].
/// `update` is called synchronously after every successful mutation, with the
/// model as it stands once the mutation is complete.
pub trait ModelListener {
    fn update(&self, model: &ExpenseTrackerModel);
}

/// Listener identity: the address of the shared allocation behind the `Rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerKey(usize);

impl ListenerKey {
    fn of<L: ?Sized>(listener: &Rc<L>) -> Self {
        ListenerKey(Rc::as_ptr(listener).cast::<()>() as usize)
    }
}

/// Unordered set of non-owning listener handles.
/// An entry whose listener has been dropped counts as absent and is pruned
/// lazily, which also frees its key for reuse.
#[derive(Default)]
pub(crate) struct ListenerSet {
    entries: HashMap<ListenerKey, Weak<dyn ModelListener>>,
}

impl ListenerSet {
    /// Returns false when the listener is already registered.
    pub fn insert(&mut self, listener: &Rc<dyn ModelListener>) -> bool {
        if self.contains(listener) {
            return false;
        }
        self.entries.insert(ListenerKey::of(listener), Rc::downgrade(listener));
        true
    }

    pub fn contains<L: ?Sized>(&self, listener: &Rc<L>) -> bool {
        self.entries
            .get(&ListenerKey::of(listener))
            .is_some_and(|handle| handle.strong_count() > 0)
    }

    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|handle| handle.strong_count() > 0)
            .count()
    }

    /// Drop entries whose listener no longer exists. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, handle| handle.strong_count() > 0);
        before - self.entries.len()
    }

    /// Strong handles to every live listener, for one notification pass.
    pub fn snapshot(&self) -> Vec<Rc<dyn ModelListener>> {
        self.entries.values().filter_map(Weak::upgrade).collect()
    }
}
