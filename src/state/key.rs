//! Statically typed field tokens and their erased lookup keys.

use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

/// A family of shared state, identified by its Rust type.
///
/// Components that agree on the same shape type share the same store.
pub trait SharedShape: 'static {
    /// Human readable name used in logs and key display.
    const NAME: &'static str;
}

/// Token addressing one field of shape `S` holding values of type `T`.
///
/// Declare one per field as an associated const (see [`shared_fields!`]);
/// the token itself carries no state.
///
/// [`shared_fields!`]: crate::shared_fields
pub struct Field<S, T> {
    name: &'static str,
    _marker: PhantomData<fn(&S) -> T>,
}

impl<S, T> Field<S, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S: SharedShape, T> Field<S, T> {
    /// Erased key used by the store to locate the field's cell.
    pub fn key(&self) -> AttributeKey {
        AttributeKey {
            shape: TypeId::of::<S>(),
            shape_name: S::NAME,
            field: self.name,
        }
    }
}

impl<S, T> Clone for Field<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Field<S, T> {}

impl<S: SharedShape, T> fmt::Debug for Field<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("shape", &S::NAME)
            .field("name", &self.name)
            .finish()
    }
}

/// Erased identity of a field: shape type plus field name.
///
/// The value type is deliberately not part of the key, so reusing a name
/// with another type is caught by the store instead of creating a second cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeKey {
    shape: TypeId,
    shape_name: &'static str,
    field: &'static str,
}

impl AttributeKey {
    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.shape_name, self.field)
    }
}

/// Declare the field tokens of a shared state shape.
///
/// ```
/// use shared_state::shared_fields;
/// use shared_state::state::SharedShape;
///
/// pub struct Weather;
///
/// impl SharedShape for Weather {
///     const NAME: &'static str = "Weather";
/// }
///
/// shared_fields!(Weather {
///     pub WIND: u32 = "wind";
///     pub FORECAST: String = "forecast";
/// });
///
/// assert_eq!(Weather::WIND.name(), "wind");
/// ```
#[macro_export]
macro_rules! shared_fields {
    ($shape:ty {
        $( $(#[$meta:meta])* $vis:vis $konst:ident : $value:ty = $name:literal; )*
    }) => {
        impl $shape {
            $(
                $(#[$meta])*
                $vis const $konst: $crate::state::Field<$shape, $value> =
                    $crate::state::Field::new($name);
            )*
        }
    };
}
