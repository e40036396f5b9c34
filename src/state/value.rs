//! Snapshot wrappers for shared values.

/// Snapshot of a cell as seen by a producer-side read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedValue<T> {
    /// Nothing has been written yet.
    NotPublished,
    Published(T),
}

impl<T> PublishedValue<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Published(value) => Some(value),
            Self::NotPublished => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Published(value) => Some(value),
            Self::NotPublished => None,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

impl<T> Default for PublishedValue<T> {
    fn default() -> Self {
        Self::NotPublished
    }
}

impl<T> From<Option<T>> for PublishedValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotPublished, Self::Published)
    }
}

/// A shared value as held in a consumer's UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedValue<T> {
    /// No update has arrived from the subscription yet.
    NotObserved,
    Observed(T),
}

impl<T> Default for ObservedValue<T> {
    fn default() -> Self {
        Self::NotObserved
    }
}

impl<T> ObservedValue<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Observed(value) => Some(value),
            Self::NotObserved => None,
        }
    }

    pub fn is_observed(&self) -> bool {
        matches!(self, Self::Observed(_))
    }
}
