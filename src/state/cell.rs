//! Single observable value with replay-latest multicast.
//!
//! A cell holds either nothing or the most recent write. Every subscriber
//! gets its own unbounded queue, seeded with the current value at the moment
//! it attaches; writes are fanned out to all queues under the cell lock.

use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::state::key::AttributeKey;
use crate::state::value::PublishedValue;

/// Shared slot for one field of a shared state shape.
pub struct ValueCell<T> {
    key: AttributeKey,
    inner: Arc<Mutex<CellInner<T>>>,
}

struct CellInner<T> {
    value: Option<T>,
    subscribers: HashMap<u64, mpsc::UnboundedSender<T>>,
    next_id: u64,
}

impl<T: Clone + Send + 'static> ValueCell<T> {
    /// Create an empty cell.
    pub fn new(key: AttributeKey) -> Self {
        Self {
            key,
            inner: Arc::new(Mutex::new(CellInner {
                value: None,
                subscribers: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    pub fn key(&self) -> AttributeKey {
        self.key
    }

    /// Replace the current value and deliver it to every live subscription.
    ///
    /// Never waits on consumers. Subscriptions whose receiver is gone are
    /// dropped from the fan-out set.
    pub fn write(&self, value: T) {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|_, sender| sender.send(value.clone()).is_ok());
        inner.value = Some(value);
        tracing::trace!(
            key = %self.key,
            subscribers = inner.subscribers.len(),
            "Shared value written"
        );
    }

    /// Latest written value, or `None` if the cell was never written.
    pub fn read(&self) -> Option<T> {
        self.inner.lock().value.clone()
    }

    pub fn current_value(&self) -> PublishedValue<T> {
        self.read().into()
    }

    /// Attach a new subscription.
    ///
    /// If a value is set it is queued first; every later write follows in
    /// the order it was applied to this cell. Snapshot and registration
    /// happen under one lock, so a concurrent write lands exactly once.
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        if let Some(value) = &inner.value {
            // Receiver is held locally, so this cannot fail.
            let _ = sender.send(value.clone());
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.insert(id, sender);
        tracing::trace!(
            key = %self.key,
            subscription = id,
            replayed = inner.value.is_some(),
            "Subscription attached"
        );
        drop(inner);

        Subscription {
            id,
            key: self.key,
            receiver: Some(receiver),
            cell: Arc::downgrade(&self.inner),
        }
    }

    /// Number of subscriptions currently registered for fan-out.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Live sequence of values from one [`ValueCell`].
///
/// Yields the replayed value (if any), then every later write. Ends when
/// cancelled or when the cell is destroyed. Dropping the subscription
/// cancels it.
pub struct Subscription<T> {
    id: u64,
    key: AttributeKey,
    receiver: Option<mpsc::UnboundedReceiver<T>>,
    cell: Weak<Mutex<CellInner<T>>>,
}

impl<T> Subscription<T> {
    /// A subscription that is already finished: `next()` returns `None`.
    pub(crate) fn ended(key: AttributeKey) -> Self {
        let (_, receiver) = mpsc::unbounded_channel();
        Self {
            id: 0,
            key,
            receiver: Some(receiver),
            cell: Weak::new(),
        }
    }

    /// Wait for the next value.
    ///
    /// Returns `None` once the subscription is cancelled or the cell is gone.
    /// Cancel-safe: dropping the future loses no value.
    pub async fn next(&mut self) -> Option<T> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.recv().await,
            None => None,
        }
    }

    /// Take the next value if one is already queued.
    pub fn try_next(&mut self) -> Option<T> {
        self.receiver.as_mut()?.try_recv().ok()
    }

    /// Stop receiving and release the registration in the cell.
    ///
    /// Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        let Some(mut receiver) = self.receiver.take() else {
            return;
        };
        receiver.close();
        if let Some(cell) = self.cell.upgrade() {
            cell.lock().subscribers.remove(&self.id);
        }
        tracing::trace!(key = %self.key, subscription = self.id, "Subscription cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.receiver.is_none()
    }

    pub fn key(&self) -> AttributeKey {
        self.key
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> Unpin for Subscription<T> {}

impl<T> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ValueCell")
            .field("key", &self.key.to_string())
            .field("set", &inner.value.is_some())
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key.to_string())
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        match self.receiver.as_mut() {
            Some(receiver) => receiver.poll_recv(cx),
            None => Poll::Ready(None),
        }
    }
}
