use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppState, TtlPredictionCache};
use crate::routes::with_scoring_routes;
use collections_ai::config::AppConfig;
use collections_ai::error::AppError;
use collections_ai::scoring::{PriorityWeights, ScoreBenchmarks, ScoringService};
use collections_ai::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let cache = Arc::new(TtlPredictionCache::new(config.cache.prediction_ttl));
    let scoring_service = Arc::new(ScoringService::new(
        PriorityWeights::default(),
        ScoreBenchmarks::default(),
        Some(cache),
    ));

    let app = with_scoring_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "collections scoring engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
