//! Reactive list state shared between commands and renderers.
//!
//! Every entity module owns one [`ListStore`]. Loading operations publish
//! [`ListState`] transitions into it; renderers either read the current
//! snapshot with [`ListStore::get`] or follow transitions with
//! [`ListStore::subscribe`].

use std::sync::Arc;

use tokio::sync::watch;

/// Lifecycle of one fetched list.
///
/// Rows travel behind an [`Arc`], so cloning a snapshot costs the same for
/// ten rows as for ten thousand.
#[derive(Debug)]
pub enum ListState<T> {
    /// Nothing has been requested yet.
    Idle,
    /// A fetch is in flight; previous rows are already discarded.
    Loading,
    /// The last fetch succeeded.
    Ready(Arc<Vec<T>>),
    /// The last fetch failed, with a rendered message.
    Failed(String),
}

impl<T> ListState<T> {
    /// The rows of a `Ready` state.
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            ListState::Ready(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ListState::Failed(_))
    }
}

// Derived Clone would demand T: Clone; sharing the Arc is enough.
impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            ListState::Idle => ListState::Idle,
            ListState::Loading => ListState::Loading,
            ListState::Ready(rows) => ListState::Ready(Arc::clone(rows)),
            ListState::Failed(message) => ListState::Failed(message.clone()),
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

/// A subscribable slot holding the latest [`ListState`].
#[derive(Debug)]
pub struct ListStore<T> {
    tx: watch::Sender<ListState<T>>,
}

impl<T> ListStore<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ListState::Idle);
        Self { tx }
    }

    /// The current snapshot.
    pub fn get(&self) -> ListState<T> {
        self.tx.borrow().clone()
    }

    /// A receiver that observes every transition after the current one.
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.tx.subscribe()
    }

    /// Replaces the snapshot and notifies subscribers.
    pub fn set(&self, state: ListState<T>) {
        // send_replace stores the value even while no receiver is alive.
        self.tx.send_replace(state);
    }
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
