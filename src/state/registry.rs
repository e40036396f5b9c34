//! Process-wide stores, one per shared state shape.
//!
//! Components that name the same shape type resolve to the same store, and
//! therefore the same cells, without being handed a store explicitly.
//! Stores live until the process exits; there is no reset.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::state::error::SharedStateError;
use crate::state::key::{Field, SharedShape};
use crate::state::store::{KeyedStore, StoreInner};
use crate::state::view::{ReadOnlyView, WriteOnlyView};

static STORES: LazyLock<RwLock<HashMap<TypeId, Arc<StoreInner>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The process store for shape `S`, created on first call.
pub fn store_for<S: SharedShape>() -> KeyedStore<S> {
    let shape = TypeId::of::<S>();

    if let Some(inner) = STORES.read().get(&shape) {
        return KeyedStore::from_inner(Arc::clone(inner));
    }

    let mut stores = STORES.write();
    let inner = stores.entry(shape).or_insert_with(|| {
        tracing::debug!(shape = S::NAME, "Creating process shared state store");
        Arc::new(StoreInner::new(S::NAME))
    });
    KeyedStore::from_inner(Arc::clone(inner))
}

/// Read-only view of `field` in the process store.
pub fn observer<S, T>(field: Field<S, T>) -> Result<ReadOnlyView<T>, SharedStateError>
where
    S: SharedShape,
    T: Clone + Send + 'static,
{
    store_for::<S>().read_only(field)
}

/// Write-only view of `field` in the process store.
pub fn publisher<S, T>(field: Field<S, T>) -> Result<WriteOnlyView<T>, SharedStateError>
where
    S: SharedShape,
    T: Clone + Send + 'static,
{
    store_for::<S>().write_only(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RegistryShape;

    impl SharedShape for RegistryShape {
        const NAME: &'static str = "RegistryShape";
    }

    struct OtherShape;

    impl SharedShape for OtherShape {
        const NAME: &'static str = "OtherShape";
    }

    const LEVEL: Field<RegistryShape, u8> = Field::new("level");
    const ISOLATED: Field<RegistryShape, u8> = Field::new("isolated");
    const OTHER_ISOLATED: Field<OtherShape, u8> = Field::new("isolated");

    #[test]
    fn same_shape_same_store() {
        let a = store_for::<RegistryShape>();
        let b = store_for::<RegistryShape>();
        assert!(a.same_store(&b));
    }

    #[test]
    fn publisher_and_observer_converge() {
        let writer = publisher(LEVEL).unwrap();
        let reader = observer(LEVEL).unwrap();
        writer.write(4);
        assert_eq!(reader.read(), Some(4));
    }

    #[test]
    fn shapes_do_not_share_cells() {
        publisher(OTHER_ISOLATED).unwrap().write(1);
        assert_eq!(observer(OTHER_ISOLATED).unwrap().read(), Some(1));
        assert_eq!(observer(ISOLATED).unwrap().read(), None);
    }
}
