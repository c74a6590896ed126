//! The action vocabulary recognized by the transformer.

use serde::{Deserialize, Serialize};

/// Actions understood by an undoable reducer.
///
/// Five control actions drive the history itself; everything else travels
/// through [`Forward`](HistoryAction::Forward) as an opaque payload handed
/// verbatim to the base reducer. The transformer matches this enum
/// exhaustively, so there is no "unrecognized action" path: anything that is
/// not a control action is the base reducer's business.
///
/// # Example
///
/// ```rust
/// use retrace::HistoryAction;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum CounterAction {
///     Increase,
///     Decrease,
/// }
///
/// let forwarded = HistoryAction::Forward(CounterAction::Increase);
/// assert!(!forwarded.is_control());
/// assert!(HistoryAction::<CounterAction>::Undo.is_control());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryAction<A> {
    /// Step `present` back to the most recent past entry.
    Undo,
    /// Step `present` forward to the nearest future entry.
    Redo,
    /// Rewind all the way to the oldest recorded entry.
    UndoAll,
    /// Drop every past entry, keeping `present` and `future`.
    ClearPast,
    /// Drop every future entry, keeping `past` and `present`.
    ClearFuture,
    /// Any other action, forwarded to the base reducer unchanged.
    Forward(A),
}

impl<A> HistoryAction<A> {
    /// Whether this action manipulates the history directly rather than
    /// being forwarded to the base reducer.
    pub fn is_control(&self) -> bool {
        !matches!(self, Self::Forward(_))
    }
}
