use serde::{Deserialize, Serialize};

pub mod client;
pub mod mock;

/// The minimal payload the acquiring bank's contract requires. Field names
/// are the bank's wire names.
#[derive(Debug, Clone, Serialize)]
pub struct BankAuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Deserialize)]
pub struct BankAuthorizationResponse {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: String,
}

/// The bank either makes a decision or it doesn't. `Unavailable` covers
/// every way of not getting one: transport failure, timeout, non-success
/// status, undecodable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAuthorizationOutcome {
    Authorized { code: String },
    Declined,
    Unavailable,
}

#[async_trait::async_trait]
pub trait BankAuthorizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authorize(&self, request: BankAuthorizationRequest) -> BankAuthorizationOutcome;
}
