//! Keyed registry of value cells for one shared state shape.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::state::cell::{Subscription, ValueCell};
use crate::state::error::SharedStateError;
use crate::state::key::{AttributeKey, Field, SharedShape};
use crate::state::view::{ReadOnlyAccess, ReadOnlyView, WriteOnlyAccess, WriteOnlyView};

/// Thread-safe map from field to cell, creating cells on first use.
///
/// Cloning is cheap and yields a handle to the same cells. There is exactly
/// one cell per field for as long as any handle to the store exists.
pub struct KeyedStore<S> {
    inner: Arc<StoreInner>,
    _shape: PhantomData<fn() -> S>,
}

/// Untyped store contents; shared with the process registry.
pub(crate) struct StoreInner {
    shape: &'static str,
    cells: RwLock<HashMap<AttributeKey, ErasedCell>>,
}

struct ErasedCell {
    value_type: &'static str,
    cell: Arc<dyn Any + Send + Sync>,
}

impl StoreInner {
    pub(crate) fn new(shape: &'static str) -> Self {
        Self {
            shape,
            cells: RwLock::new(HashMap::new()),
        }
    }
}

impl<S: SharedShape> KeyedStore<S> {
    /// Create a private store, not shared through the process registry.
    pub fn new() -> Self {
        Self::from_inner(Arc::new(StoreInner::new(S::NAME)))
    }

    pub(crate) fn from_inner(inner: Arc<StoreInner>) -> Self {
        Self {
            inner,
            _shape: PhantomData,
        }
    }

    /// Get the cell for `field`, creating an empty one on first access.
    ///
    /// # Errors
    /// Returns [`SharedStateError::TypeMismatch`] if the field's cell was
    /// created with a different value type.
    pub fn cell_for<T>(&self, field: Field<S, T>) -> Result<Arc<ValueCell<T>>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        let key = field.key();

        if let Some(entry) = self.inner.cells.read().get(&key) {
            return downcast(key, entry);
        }

        let mut cells = self.inner.cells.write();
        // Another caller may have created it between the two locks.
        let entry = cells.entry(key).or_insert_with(|| {
            tracing::trace!(key = %key, value_type = type_name::<T>(), "Creating shared value cell");
            ErasedCell {
                value_type: type_name::<T>(),
                cell: Arc::new(ValueCell::<T>::new(key)),
            }
        });
        downcast(key, entry)
    }

    pub fn read_only<T>(&self, field: Field<S, T>) -> Result<ReadOnlyView<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        self.cell_for(field).map(ReadOnlyView::new)
    }

    pub fn write_only<T>(&self, field: Field<S, T>) -> Result<WriteOnlyView<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        self.cell_for(field).map(WriteOnlyView::new)
    }

    /// Write `value` to `field`.
    pub fn write<T>(&self, field: Field<S, T>, value: T) -> Result<(), SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        self.cell_for(field)?.write(value);
        Ok(())
    }

    /// Current value of `field`, `None` if never written.
    pub fn read<T>(&self, field: Field<S, T>) -> Result<Option<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        Ok(self.cell_for(field)?.read())
    }

    pub fn subscribe<T>(&self, field: Field<S, T>) -> Result<Subscription<T>, SharedStateError>
    where
        T: Clone + Send + 'static,
    {
        Ok(self.cell_for(field)?.subscribe())
    }

    /// Capability handle that can only hand out read-only views.
    pub fn read_only_access(&self) -> ReadOnlyAccess<S> {
        ReadOnlyAccess::new(self.clone())
    }

    /// Capability handle that can only hand out write-only views.
    pub fn write_only_access(&self) -> WriteOnlyAccess<S> {
        WriteOnlyAccess::new(self.clone())
    }

    /// Whether a cell exists for `field`.
    pub fn contains<T>(&self, field: Field<S, T>) -> bool {
        self.inner.cells.read().contains_key(&field.key())
    }

    /// Number of cells created so far.
    pub fn len(&self) -> usize {
        self.inner.cells.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both handles refer to the same underlying store.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn downcast<T>(key: AttributeKey, entry: &ErasedCell) -> Result<Arc<ValueCell<T>>, SharedStateError>
where
    T: Clone + Send + 'static,
{
    Arc::clone(&entry.cell)
        .downcast::<ValueCell<T>>()
        .map_err(|_| {
            tracing::warn!(
                key = %key,
                expected = entry.value_type,
                found = type_name::<T>(),
                "Shared state field requested with wrong value type"
            );
            SharedStateError::TypeMismatch {
                key,
                expected: entry.value_type,
                found: type_name::<T>(),
            }
        })
}

impl<S: SharedShape> Default for KeyedStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for KeyedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _shape: PhantomData,
        }
    }
}

impl<S> fmt::Debug for KeyedStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedStore")
            .field("shape", &self.inner.shape)
            .field("cells", &self.inner.cells.read().len())
            .finish()
    }
}
