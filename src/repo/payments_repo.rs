use crate::domain::payment::PaymentRecord;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Write-once keyed store for processed payments. Lives for the process
/// lifetime only; records are never updated or deleted.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    payments: Arc<DashMap<Uuid, PaymentRecord>>,
}

impl PaymentsRepo {
    /// Inserts under `record.id`. An id that is already present is left
    /// untouched; ids are freshly generated per payment, so that path is
    /// never expected to run.
    pub fn insert(&self, record: PaymentRecord) {
        self.payments.entry(record.id).or_insert(record);
    }

    pub fn get(&self, id: Uuid) -> Option<PaymentRecord> {
        self.payments.get(&id).map(|r| r.value().clone())
    }
}
