use crate::domain::payment::{Payment, PaymentId, PaymentStatus};
use crate::domain::ports::{ConditionalUpdate, PaymentStore};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing payment records.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent payment store implementation using RocksDB.
///
/// Records are stored under the `payments` column family, keyed by the raw
/// id bytes with JSON-serialized values. RocksDB offers no conditional put,
/// so confirmations are serialized through a mutex held across the
/// read-check-write sequence; plain writes and reads bypass it.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>` and
/// the confirmation mutex).
#[derive(Clone)]
pub struct RocksDbPaymentStore {
    db: Arc<DB>,
    confirm_lock: Arc<Mutex<()>>,
}

impl RocksDbPaymentStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the `payments` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_payments])?;

        Ok(Self {
            db: Arc::new(db),
            confirm_lock: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
            PaymentError::StorageError(Box::new(std::io::Error::other(
                "Payments column family not found",
            )))
        })
    }

    fn encode(payment: &Payment) -> Result<Vec<u8>> {
        serde_json::to_vec(payment)
            .map_err(|e| PaymentError::StorageError(Box::new(e)))
    }

    fn decode(bytes: &[u8]) -> Result<Payment> {
        serde_json::from_slice(bytes)
            .map_err(|e| PaymentError::StorageError(Box::new(e)))
    }

    fn put(&self, payment: &Payment) -> Result<()> {
        let cf = self.cf()?;
        self.db
            .put_cf(cf, payment.id.as_bytes(), Self::encode(payment)?)?;
        Ok(())
    }

    fn read(&self, id: PaymentId) -> Result<Option<Payment>> {
        let cf = self.cf()?;
        match self.db.get_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(Self::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl PaymentStore for RocksDbPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        self.put(&payment)
    }

    async fn get(&self, id: PaymentId) -> Result<Option<Payment>> {
        self.read(id)
    }

    async fn get_all(&self) -> Result<Vec<Payment>> {
        let cf = self.cf()?;
        let mut payments = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            payments.push(Self::decode(&value)?);
        }

        Ok(payments)
    }

    async fn confirm_if_pending(&self, id: PaymentId) -> Result<ConditionalUpdate> {
        // Confirmations are single-writer: the lock spans the read and the
        // write-back so two racing confirmers cannot both see Pending.
        let _guard = self.confirm_lock.lock().await;

        match self.read(id)? {
            None => Ok(ConditionalUpdate::NotFound),
            Some(mut payment) if payment.status.is_pending() => {
                payment.status = PaymentStatus::Confirmed;
                self.put(&payment)?;
                Ok(ConditionalUpdate::Applied(payment))
            }
            Some(payment) => Ok(ConditionalUpdate::Unchanged(payment)),
        }
    }
}
