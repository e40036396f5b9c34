//! Shared state distribution.
//!
//! Independent components observe and mutate common values through
//! field-addressed cells, without depending on a single shared type.
//!
//! ```text
//! publisher(field) ──write──→ ValueCell ──fan-out──→ Subscription (replay latest, then live)
//!                                  ↑
//! observer(field) ──read/subscribe─┘
//! ```
//!
//! - [`ValueCell`]: one value, multicast to every subscription
//! - [`KeyedStore`]: one cell per [`Field`] of a shape, created lazily
//! - [`ReadOnlyView`] / [`WriteOnlyView`]: capability-restricted handles
//! - [`registry`]: process-wide store per shape type

mod cell;
mod error;
mod key;
pub mod registry;
mod store;
mod value;
mod view;

pub use cell::{Subscription, ValueCell};
pub use error::SharedStateError;
pub use key::{AttributeKey, Field, SharedShape};
pub use registry::{observer, publisher, store_for};
pub use store::KeyedStore;
pub use value::{ObservedValue, PublishedValue};
pub use view::{ReadOnlyAccess, ReadOnlyView, WriteOnlyAccess, WriteOnlyView};
