//! The imperative shell: a single-threaded dispatch store.
//!
//! The core transformer threads state explicitly; this module owns that
//! thread for callers who want one. A `Store` holds the composite state,
//! pushes every action through its [`Undoable`] reducer, and notifies
//! subscribers of each new state. Exclusive access (`&mut self`) is the
//! single-writer discipline the transformer relies on.

mod error;

pub use error::StoreError;

use crate::core::{HistoryAction, HistoryState, Snapshot, Undoable};

/// Handle identifying a registered subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

struct Subscriber<T: Snapshot> {
    token: SubscriptionToken,
    callback: Box<dyn FnMut(&HistoryState<T>) + Send>,
}

/// Owns a composite state and dispatches actions against it.
///
/// The composite state is materialized lazily: a fresh store holds nothing
/// until the first dispatch or state inspection, at which point the reducer
/// seeds it. After that every dispatch replaces it wholesale with the
/// reducer's output.
///
/// # Example
///
/// ```rust
/// use retrace::{undoable, Store};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum CounterAction {
///     Increase,
/// }
///
/// let mut store = Store::new(undoable(
///     |action: Option<&CounterAction>, state: Option<&i64>| {
///         let current = state.copied().unwrap_or(0);
///         match action {
///             Some(CounterAction::Increase) => current + 1,
///             None => current,
///         }
///     },
/// ));
///
/// store.apply(CounterAction::Increase);
/// assert_eq!(*store.state().present(), 1);
///
/// store.undo();
/// assert_eq!(*store.state().present(), 0);
/// assert!(store.state().can_redo());
/// ```
pub struct Store<T, A, R>
where
    T: Snapshot,
    R: Fn(Option<&A>, Option<&T>) -> T,
{
    reducer: Undoable<T, A, R>,
    state: Option<HistoryState<T>>,
    subscribers: Vec<Subscriber<T>>,
    next_token: u64,
}

impl<T, A, R> Store<T, A, R>
where
    T: Snapshot,
    R: Fn(Option<&A>, Option<&T>) -> T,
{
    /// Create a store around an undoable reducer. No state is materialized
    /// until first use.
    pub fn new(reducer: Undoable<T, A, R>) -> Self {
        Self {
            reducer,
            state: None,
            subscribers: Vec::new(),
            next_token: 0,
        }
    }

    /// The current composite state, seeding it first if this store has
    /// never been touched.
    pub fn state(&mut self) -> &HistoryState<T> {
        let Self { reducer, state, .. } = self;
        state.get_or_insert_with(|| reducer.initial_state())
    }

    /// The current value of the wrapped state.
    pub fn present(&mut self) -> &T {
        self.state().present()
    }

    /// Dispatch one action: reduce, store the result, notify subscribers.
    pub fn dispatch(&mut self, action: HistoryAction<A>) {
        let next = self.reducer.reduce(action, self.state.take());
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&next);
        }
        self.state = Some(next);
    }

    /// Dispatch a base-reducer action (shorthand for
    /// `dispatch(HistoryAction::Forward(action))`).
    pub fn apply(&mut self, action: A) {
        self.dispatch(HistoryAction::Forward(action));
    }

    /// Dispatch [`HistoryAction::Undo`].
    pub fn undo(&mut self) {
        self.dispatch(HistoryAction::Undo);
    }

    /// Dispatch [`HistoryAction::Redo`].
    pub fn redo(&mut self) {
        self.dispatch(HistoryAction::Redo);
    }

    /// Dispatch [`HistoryAction::UndoAll`].
    pub fn undo_all(&mut self) {
        self.dispatch(HistoryAction::UndoAll);
    }

    /// Dispatch [`HistoryAction::ClearPast`].
    pub fn clear_past(&mut self) {
        self.dispatch(HistoryAction::ClearPast);
    }

    /// Dispatch [`HistoryAction::ClearFuture`].
    pub fn clear_future(&mut self) {
        self.dispatch(HistoryAction::ClearFuture);
    }

    /// Register a callback invoked with each new composite state, after
    /// every dispatch. Returns a token for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionToken
    where
        F: FnMut(&HistoryState<T>) + Send + 'static,
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push(Subscriber {
            token,
            callback: Box::new(callback),
        });
        token
    }

    /// Remove a previously registered subscriber.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> Result<(), StoreError> {
        let position = self
            .subscribers
            .iter()
            .position(|subscriber| subscriber.token == token)
            .ok_or(StoreError::UnknownSubscription(token))?;
        self.subscribers.remove(position);
        Ok(())
    }
}
