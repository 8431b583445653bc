use crate::bank::{BankAuthorizationOutcome, BankAuthorizationRequest, BankAuthorizer};
use crate::domain::payment::{CreatePaymentRequest, PaymentRecord, PaymentStatus};
use crate::repo::payments_repo::PaymentsRepo;
use crate::validation::{validate, CardExpiry, FieldError};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub bank: Arc<dyn BankAuthorizer>,
}

#[derive(Debug)]
pub enum ProcessError {
    /// The request failed validation. The bank was never contacted and
    /// nothing was persisted; `record` is the synthesized rejection handed
    /// back alongside the field errors.
    Invalid {
        record: PaymentRecord,
        errors: Vec<FieldError>,
    },
}

impl PaymentService {
    pub async fn process(&self, req: CreatePaymentRequest) -> Result<PaymentRecord, ProcessError> {
        let today = chrono::Utc::now().date_naive();
        let expiry = match validate(&req, today) {
            Ok(expiry) => expiry,
            Err(errors) => {
                tracing::info!(error_count = errors.len(), "payment request failed validation");
                return Err(ProcessError::Invalid {
                    record: rejected_record(&req),
                    errors,
                });
            }
        };

        let outcome = self
            .bank
            .authorize(BankAuthorizationRequest {
                card_number: req.card_number.clone(),
                expiry_date: req.expiry_date.clone(),
                currency: req.currency.clone(),
                amount: req.amount,
                cvv: req.cvv.clone(),
            })
            .await;

        let status = match outcome {
            BankAuthorizationOutcome::Authorized { .. } => PaymentStatus::Authorized,
            BankAuthorizationOutcome::Declined => PaymentStatus::Declined,
            BankAuthorizationOutcome::Unavailable => PaymentStatus::Rejected,
        };

        let record = PaymentRecord {
            id: Uuid::new_v4(),
            status,
            card_number_last_four: last_four(&req.card_number),
            expiry_month: expiry.month,
            expiry_year: expiry.year,
            currency: req.currency,
            amount: req.amount,
        };

        self.payments_repo.insert(record.clone());
        tracing::info!(payment_id = %record.id, status = ?record.status, "payment processed");

        Ok(record)
    }

    pub fn lookup(&self, id: Uuid) -> Option<PaymentRecord> {
        self.payments_repo.get(id)
    }
}

// Rejection for input that never passed validation: same masking rules, but
// the expiry is copied best-effort since the field may not even parse.
fn rejected_record(req: &CreatePaymentRequest) -> PaymentRecord {
    let expiry = parse_expiry_lenient(&req.expiry_date);
    PaymentRecord {
        id: Uuid::new_v4(),
        status: PaymentStatus::Rejected,
        card_number_last_four: last_four(&req.card_number),
        expiry_month: expiry.month,
        expiry_year: expiry.year,
        currency: req.currency.clone(),
        amount: req.amount,
    }
}

fn parse_expiry_lenient(raw: &str) -> CardExpiry {
    let (month, year) = raw.split_once('/').unwrap_or(("", ""));
    CardExpiry {
        month: month.parse().unwrap_or(0),
        year: year.parse().unwrap_or(0),
    }
}

fn last_four(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
}
