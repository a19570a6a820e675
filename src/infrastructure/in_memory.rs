use crate::domain::payment::{Payment, PaymentId, PaymentStatus};
use crate::domain::ports::{ConditionalUpdate, PaymentStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment records.
///
/// Uses `Arc<RwLock<HashMap<PaymentId, Payment>>>` to allow shared
/// concurrent access. `Clone` shares the underlying map, so clones observe
/// each other's writes.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<PaymentId, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }

    async fn confirm_if_pending(&self, id: PaymentId) -> Result<ConditionalUpdate> {
        // The write lock is held across the read-check-write, which makes
        // the status swap atomic with respect to concurrent confirmations.
        let mut payments = self.payments.write().await;
        match payments.get_mut(&id) {
            None => Ok(ConditionalUpdate::NotFound),
            Some(payment) if payment.status.is_pending() => {
                payment.status = PaymentStatus::Confirmed;
                Ok(ConditionalUpdate::Applied(payment.clone()))
            }
            Some(payment) => Ok(ConditionalUpdate::Unchanged(payment.clone())),
        }
    }
}
