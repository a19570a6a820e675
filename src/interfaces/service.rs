use crate::application::lifecycle::PaymentLifecycle;
use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::PaymentStoreBox;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

/// Creation intent as received from the request-handling collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub customer_id: String,
    pub amount: Decimal,
}

/// Thin façade exposing the payment operations to the outside boundary.
///
/// Holds no logic of its own: validation and state decisions live in the
/// lifecycle manager, and errors flow through unchanged.
pub struct PaymentService {
    lifecycle: PaymentLifecycle,
}

impl PaymentService {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self {
            lifecycle: PaymentLifecycle::new(store),
        }
    }

    pub async fn create_payment(&self, request: CreatePaymentRequest) -> Result<Payment> {
        self.lifecycle
            .create(&request.customer_id, request.amount)
            .await
    }

    pub async fn get_all_payments(&self) -> Result<Vec<Payment>> {
        self.lifecycle.list().await
    }

    pub async fn confirm_payment(&self, id: PaymentId) -> Result<Payment> {
        match self.lifecycle.confirm(id).await {
            Err(err @ PaymentError::InvalidStateError(_)) => {
                warn!(payment = %id, "confirmation rejected: not pending");
                Err(err)
            }
            other => other,
        }
    }
}
