mod censor;
mod config;
mod engine;
mod error;
mod http_engine;
mod normalizer;
mod types;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use metrics::counter;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use config::Config;
use engine::Classifier;
use error::{ApiError, ApiResult};
use http_engine::HttpClassifier;
use types::{FilterResult, RootResponse, TextInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,profanity_gateway=debug".into());
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!("Starting profanity gateway with config: {:?}", config);

    let classifier_config = config.classifier_config()?;
    let classifier = HttpClassifier::new(classifier_config)?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = metered_app(
        AppState::new(Arc::new(classifier)),
        prometheus_layer,
        move || metric_handle.render(),
    )
    .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server_address()).await?;
    tracing::info!("Server running on http://{}", config.server_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/filter_profanity", post(filter_handler))
        .with_state(state)
}

/// `app` plus HTTP metrics and the `/metrics` endpoint rendered by `render`.
fn metered_app<R>(
    state: AppState,
    prometheus_layer: PrometheusMetricLayer<'static>,
    render: R,
) -> Router
where
    R: Fn() -> String + Clone + Send + Sync + 'static,
{
    app(state)
        .route("/metrics", get(move || async move { render() }))
        .layer(prometheus_layer)
}

#[derive(Clone)]
struct AppState {
    classifier: Arc<dyn Classifier + Send + Sync>,
}

impl AppState {
    fn new(classifier: Arc<dyn Classifier + Send + Sync>) -> Self {
        Self { classifier }
    }
}

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Profanity Filter API",
    })
}

// Dropping this future on client disconnect also drops the upstream request.
#[tracing::instrument(
    skip(state, input),
    fields(request_id = %Uuid::new_v4().simple(), input_chars = tracing::field::Empty)
)]
async fn filter_handler(
    State(state): State<AppState>,
    input: Result<Json<TextInput>, JsonRejection>,
) -> ApiResult<Json<FilterResult>> {
    counter!("profanity_requests_total").increment(1);

    let Json(input) = input.inspect_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
    })?;
    tracing::Span::current().record("input_chars", input.text.chars().count());

    let normalized = normalizer::normalize(&input.text);

    let response = state
        .classifier
        .classify(&normalized)
        .await
        .map_err(|e| {
            counter!("profanity_upstream_errors_total").increment(1);
            tracing::error!(error = ?e, "Classifier call failed");
            ApiError::upstream()
        })?;

    let result = censor::censor(&response);
    if result.is_profane {
        counter!("profanity_flagged_total").increment(1);
    }

    tracing::info!(
        is_profane = result.is_profane,
        profane_words = result.profane_words.len(),
        "Filter completed"
    );
    Ok(Json(result))
}
