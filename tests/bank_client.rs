use payment_gateway::bank::client::HttpBankAuthorizer;
use payment_gateway::bank::{BankAuthorizationOutcome, BankAuthorizationRequest, BankAuthorizer};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorizer(base_url: &str) -> HttpBankAuthorizer {
    HttpBankAuthorizer {
        base_url: base_url.to_string(),
        timeout_ms: 2500,
        client: reqwest::Client::new(),
    }
}

fn request() -> BankAuthorizationRequest {
    BankAuthorizationRequest {
        card_number: "1234567890123451".to_string(),
        expiry_date: "12/2030".to_string(),
        currency: "USD".to_string(),
        amount: 100,
        cvv: "123".to_string(),
    }
}

#[tokio::test]
async fn authorized_response_carries_the_authorization_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(body_partial_json(json!({
            "card_number": "1234567890123451",
            "expiry_date": "12/2030",
            "currency": "USD",
            "amount": 100,
            "cvv": "123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorized": true,
            "authorization_code": "auth-code-123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = authorizer(&server.uri()).authorize(request()).await;
    assert_eq!(
        outcome,
        BankAuthorizationOutcome::Authorized {
            code: "auth-code-123".to_string()
        }
    );
}

#[tokio::test]
async fn unauthorized_response_is_a_decline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorized": false,
            "authorization_code": "",
        })))
        .mount(&server)
        .await;

    let outcome = authorizer(&server.uri()).authorize(request()).await;
    assert_eq!(outcome, BankAuthorizationOutcome::Declined);
}

#[tokio::test]
async fn non_success_statuses_are_all_unavailable() {
    for status in [503, 400, 500, 404] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let outcome = authorizer(&server.uri()).authorize(request()).await;
        assert_eq!(outcome, BankAuthorizationOutcome::Unavailable, "status {status}");
    }
}

#[tokio::test]
async fn undecodable_success_body_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let outcome = authorizer(&server.uri()).authorize(request()).await;
    assert_eq!(outcome, BankAuthorizationOutcome::Unavailable);
}

#[tokio::test]
async fn unreachable_bank_is_unavailable() {
    // Nothing listens here; the connection is refused outright.
    let outcome = authorizer("http://127.0.0.1:9").authorize(request()).await;
    assert_eq!(outcome, BankAuthorizationOutcome::Unavailable);
}

#[tokio::test]
async fn slow_bank_times_out_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"authorized": true, "authorization_code": "late"}))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut client = authorizer(&server.uri());
    client.timeout_ms = 50;

    let outcome = client.authorize(request()).await;
    assert_eq!(outcome, BankAuthorizationOutcome::Unavailable);
}

#[tokio::test]
async fn missing_authorization_code_defaults_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authorized": true})))
        .mount(&server)
        .await;

    let outcome = authorizer(&server.uri()).authorize(request()).await;
    assert_eq!(
        outcome,
        BankAuthorizationOutcome::Authorized { code: String::new() }
    );
}
