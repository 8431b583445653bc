use crate::bank::{BankAuthorizationOutcome, BankAuthorizationRequest, BankAuthorizer};

/// Stand-in for the real bank during local runs and tests, selected with
/// `BANK_ADAPTER=MOCK`.
pub struct MockBankAuthorizer {
    pub behavior: String,
}

#[async_trait::async_trait]
impl BankAuthorizer for MockBankAuthorizer {
    fn name(&self) -> &'static str {
        "bank_mock"
    }

    async fn authorize(&self, _request: BankAuthorizationRequest) -> BankAuthorizationOutcome {
        match self.behavior.as_str() {
            "ALWAYS_DECLINE" => BankAuthorizationOutcome::Declined,
            "ALWAYS_UNAVAILABLE" => BankAuthorizationOutcome::Unavailable,
            _ => BankAuthorizationOutcome::Authorized {
                code: format!("mock_auth_{}", uuid::Uuid::new_v4()),
            },
        }
    }
}
