use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use leadrelay_api::api::cors::cors_layer;
use leadrelay_api::api::handlers::leads;
use leadrelay_api::config::CrmConfig;
use leadrelay_api::domain::gateways::CrmGateway;
use leadrelay_api::infrastructure::crm::PipedriveCrm;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Build the CRM adapter from the immutable configuration
    let config = CrmConfig::from_env();
    let crm: Arc<dyn CrmGateway> = Arc::new(PipedriveCrm::new(config));

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(leads::health_check))
        // Lead capture
        .route("/api/leads", post(leads::capture_lead))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // Shared state
        .with_state(crm);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
