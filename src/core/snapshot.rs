//! The Snapshot constraint for wrapped state types.
//!
//! Every history entry is a full copy of the wrapped state, so the state
//! type must be cloneable and comparable. Equality is what decides whether
//! an action actually changed anything.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Constraint on the state type wrapped by a history.
///
/// Snapshots are opaque values: the history never looks inside them. The
/// bounds exist for the machinery around them:
///
/// - `Clone`: each recorded entry is a full copy of the state
/// - `PartialEq`: reducer output equal to the current present is treated as
///   a no-op and recorded nowhere
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: histories of serializable state are
///   themselves serializable
/// - `Send + Sync`: histories can move across threads when the caller's
///   dispatch discipline allows it
///
/// The trait is blanket-implemented; any type meeting the bounds is a
/// `Snapshot` with no further ceremony.
///
/// # Example
///
/// ```rust
/// use retrace::Snapshot;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Document {
///     body: String,
/// }
///
/// fn assert_snapshot<T: Snapshot>() {}
/// assert_snapshot::<Document>();
/// assert_snapshot::<i64>();
/// ```
pub trait Snapshot:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Snapshot for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}
