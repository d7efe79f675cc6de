//! The string pool. Every token string committed to the lattice is interned
//! here, so repeated alternatives share one allocation and the returned
//! handles outlive the sentence that produced them.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Arc;

/// An insert-only set of shared strings. Interning is re-entrant from the
/// same thread; handles are plain `Arc<str>` and can be kept indefinitely.
#[derive(Debug, Default)]
pub struct StringPool {
    set: RefCell<HashSet<Arc<str>>>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the pooled copy of `s`, inserting it on first sight.
    pub fn intern(&self, s: &str) -> Arc<str> {
        let mut set = self.set.borrow_mut();
        if let Some(found) = set.get(s) {
            return Arc::clone(found);
        }
        let fresh: Arc<str> = Arc::from(s);
        set.insert(Arc::clone(&fresh));
        fresh
    }

    /// Number of distinct strings seen so far.
    pub fn len(&self) -> usize {
        self.set.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.borrow().is_empty()
    }
}
