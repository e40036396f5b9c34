//! Capability-restricted handles over shared cells.
//!
//! A component handed a [`ReadOnlyView`] can observe a field but has no path
//! to write it, and a [`WriteOnlyView`] holder cannot read it back. Neither
//! exposes the underlying [`ValueCell`].

use std::fmt;
use std::sync::{Arc, Weak};

use crate::state::cell::{Subscription, ValueCell};
use crate::state::error::SharedStateError;
use crate::state::key::{AttributeKey, Field, SharedShape};
use crate::state::store::KeyedStore;
use crate::state::value::PublishedValue;

/// Observe-only access to one shared field.
///
/// Holds the cell weakly: once the owning store is gone, reads return
/// nothing and new subscriptions end immediately.
pub struct ReadOnlyView<T> {
    key: AttributeKey,
    cell: Weak<ValueCell<T>>,
}

impl<T: Clone + Send + 'static> ReadOnlyView<T> {
    pub(crate) fn new(cell: Arc<ValueCell<T>>) -> Self {
        Self {
            key: cell.key(),
            cell: Arc::downgrade(&cell),
        }
    }

    pub fn read(&self) -> Option<T> {
        self.cell.upgrade()?.read()
    }

    pub fn current_value(&self) -> PublishedValue<T> {
        self.read().into()
    }

    /// Latest value (if any) followed by every later write.
    pub fn subscribe(&self) -> Subscription<T> {
        match self.cell.upgrade() {
            Some(cell) => cell.subscribe(),
            None => {
                tracing::debug!(key = %self.key, "Subscribe on a released store");
                Subscription::ended(self.key)
            }
        }
    }

    pub fn key(&self) -> AttributeKey {
        self.key
    }

    /// Whether the store behind this view still exists.
    pub fn is_attached(&self) -> bool {
        self.cell.strong_count() > 0
    }
}

/// Write-only access to one shared field.
///
/// Like [`ReadOnlyView`], does not keep the owning store alive; writes after
/// the store is gone are dropped.
pub struct WriteOnlyView<T> {
    key: AttributeKey,
    cell: Weak<ValueCell<T>>,
}

impl<T: Clone + Send + 'static> WriteOnlyView<T> {
    pub(crate) fn new(cell: Arc<ValueCell<T>>) -> Self {
        Self {
            key: cell.key(),
            cell: Arc::downgrade(&cell),
        }
    }

    pub fn write(&self, value: T) {
        match self.cell.upgrade() {
            Some(cell) => cell.write(value),
            None => tracing::debug!(key = %self.key, "Write on a released store dropped"),
        }
    }

    pub fn key(&self) -> AttributeKey {
        self.key
    }

    pub fn is_attached(&self) -> bool {
        self.cell.strong_count() > 0
    }
}

impl<T> Clone for ReadOnlyView<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<T> Clone for WriteOnlyView<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for ReadOnlyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyView")
            .field("key", &self.key.to_string())
            .field("attached", &(self.cell.strong_count() > 0))
            .finish()
    }
}

impl<T> fmt::Debug for WriteOnlyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteOnlyView")
            .field("key", &self.key.to_string())
            .field("attached", &(self.cell.strong_count() > 0))
            .finish()
    }
}

/// Store-wide handle that only yields [`ReadOnlyView`]s.
pub struct ReadOnlyAccess<S> {
    store: KeyedStore<S>,
}

impl<S: SharedShape> ReadOnlyAccess<S> {
    pub(crate) fn new(store: KeyedStore<S>) -> Self {
        Self { store }
    }

    pub fn get<T>(&self, field: Field<S, T>) -> Result<ReadOnlyView<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        self.store.read_only(field)
    }
}

/// Store-wide handle that only yields [`WriteOnlyView`]s.
pub struct WriteOnlyAccess<S> {
    store: KeyedStore<S>,
}

impl<S: SharedShape> WriteOnlyAccess<S> {
    pub(crate) fn new(store: KeyedStore<S>) -> Self {
        Self { store }
    }

    pub fn get<T>(&self, field: Field<S, T>) -> Result<WriteOnlyView<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        self.store.write_only(field)
    }
}

impl<S> Clone for ReadOnlyAccess<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> Clone for WriteOnlyAccess<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
