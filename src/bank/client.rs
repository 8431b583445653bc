use crate::bank::{
    BankAuthorizationOutcome, BankAuthorizationRequest, BankAuthorizationResponse, BankAuthorizer,
};

pub struct HttpBankAuthorizer {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl BankAuthorizer for HttpBankAuthorizer {
    fn name(&self) -> &'static str {
        "bank_http"
    }

    async fn authorize(&self, request: BankAuthorizationRequest) -> BankAuthorizationOutcome {
        let url = format!("{}/payments", self.base_url);

        let resp = self
            .client
            .post(url)
            .json(&request)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => match r.json::<BankAuthorizationResponse>().await {
                Ok(body) if body.authorized => BankAuthorizationOutcome::Authorized {
                    code: body.authorization_code,
                },
                Ok(_) => BankAuthorizationOutcome::Declined,
                Err(e) => {
                    tracing::warn!(error = %e, "bank response body could not be decoded");
                    BankAuthorizationOutcome::Unavailable
                }
            },
            Ok(r) => {
                tracing::warn!(status = r.status().as_u16(), "bank returned non-success status");
                BankAuthorizationOutcome::Unavailable
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("bank request timed out");
                BankAuthorizationOutcome::Unavailable
            }
            Err(e) => {
                tracing::warn!(error = %e, "bank request failed");
                BankAuthorizationOutcome::Unavailable
            }
        }
    }
}
