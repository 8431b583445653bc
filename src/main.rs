use axum::routing::{get, post};
use axum::Router;
use payment_gateway::bank::client::HttpBankAuthorizer;
use payment_gateway::bank::mock::MockBankAuthorizer;
use payment_gateway::bank::BankAuthorizer;
use payment_gateway::config::AppConfig;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use payment_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank: Arc<dyn BankAuthorizer> = if cfg.bank_adapter == "MOCK" {
        Arc::new(MockBankAuthorizer {
            behavior: cfg.bank_mock_behavior.clone(),
        })
    } else {
        Arc::new(HttpBankAuthorizer {
            base_url: cfg.bank_base_url.clone(),
            timeout_ms: cfg.bank_timeout_ms,
            client: reqwest::Client::new(),
        })
    };
    tracing::info!(adapter = bank.name(), "bank authorizer configured");

    let payment_service = PaymentService {
        payments_repo: PaymentsRepo::default(),
        bank,
    };

    let state = AppState { payment_service };

    let app = Router::new()
        .route("/health", get(payment_gateway::http::handlers::payments::health))
        .route("/payments", post(payment_gateway::http::handlers::payments::create_payment))
        .route(
            "/payments/:payment_id",
            get(payment_gateway::http::handlers::payments::get_payment),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
