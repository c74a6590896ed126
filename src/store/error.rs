//! Store error types.

use crate::store::SubscriptionToken;
use thiserror::Error;

/// Errors surfaced by the dispatch store.
///
/// The reducer itself is total; the only fallible surface is subscription
/// management.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No subscriber is registered under the given token, either because it
    /// was never issued by this store or was already unsubscribed.
    #[error("no subscription registered for {0:?}")]
    UnknownSubscription(SubscriptionToken),
}
