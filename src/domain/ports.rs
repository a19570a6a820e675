use super::payment::{Payment, PaymentId};
use crate::error::Result;
use async_trait::async_trait;

/// Outcome of the conditional confirmation update.
///
/// The store reports what happened; deciding which error that maps to is
/// the lifecycle manager's job.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionalUpdate {
    /// The record was pending and has been flipped to confirmed.
    Applied(Payment),
    /// The record exists but was not pending; nothing was written.
    Unchanged(Payment),
    /// No record with the given id.
    NotFound,
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn get(&self, id: PaymentId) -> Result<Option<Payment>>;
    async fn get_all(&self) -> Result<Vec<Payment>>;

    /// Sets the status to `Confirmed` only if it is currently `Pending`.
    ///
    /// Implementations must make the read-check-write atomic with respect
    /// to other confirmations of the same id, so that concurrent callers
    /// cannot both observe `Applied`.
    async fn confirm_if_pending(&self, id: PaymentId) -> Result<ConditionalUpdate>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
