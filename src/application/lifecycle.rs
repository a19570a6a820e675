use crate::domain::payment::{Amount, Payment, PaymentId};
use crate::domain::ports::{ConditionalUpdate, PaymentStoreBox};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use tracing::info;

/// Enforces the payment state machine: records start `Pending`, transition
/// exactly once to `Confirmed`, and concurrent confirmations of the same id
/// produce exactly one winner.
///
/// `PaymentLifecycle` owns the decision logic, not the storage medium. The
/// store is injected at construction, so the same manager runs against any
/// `PaymentStore` implementation.
pub struct PaymentLifecycle {
    store: PaymentStoreBox,
}

impl PaymentLifecycle {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self { store }
    }

    /// Creates a new pending payment after validating the input.
    ///
    /// The customer id is trimmed and must be non-empty; the amount must be
    /// strictly positive. On validation failure nothing is persisted.
    pub async fn create(&self, customer_id: &str, amount: Decimal) -> Result<Payment> {
        let customer_id = customer_id.trim();
        if customer_id.is_empty() {
            return Err(PaymentError::ValidationError(
                "CustomerId is required".to_string(),
            ));
        }
        let amount = Amount::new(amount)?;

        let payment = Payment::new(customer_id.to_string(), amount);
        self.store.store(payment.clone()).await?;
        info!(payment = %payment.id, customer = %payment.customer_id, "payment created");
        Ok(payment)
    }

    /// Returns a snapshot of all payments, most recent first.
    ///
    /// Equal timestamps are ordered by id ascending so the listing is
    /// deterministic.
    pub async fn list(&self) -> Result<Vec<Payment>> {
        let mut payments = self.store.get_all().await?;
        payments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(payments)
    }

    /// Transitions a pending payment to confirmed.
    ///
    /// Delegates to the store's conditional update rather than reading and
    /// writing back, so a losing concurrent confirmer always observes
    /// `InvalidStateError` and never overwrites the winner.
    pub async fn confirm(&self, id: PaymentId) -> Result<Payment> {
        match self.store.confirm_if_pending(id).await? {
            ConditionalUpdate::Applied(payment) => {
                info!(payment = %payment.id, "payment confirmed");
                Ok(payment)
            }
            ConditionalUpdate::Unchanged(_) => Err(PaymentError::InvalidStateError(id)),
            ConditionalUpdate::NotFound => Err(PaymentError::NotFoundError(id)),
        }
    }
}
