use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_analysis_routes;
use axum::extract::DefaultBodyLimit;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use injury_check::analysis::{ScoringEngine, SeededRandom, ThreadRandom};
use injury_check::config::AppConfig;
use injury_check::error::AppError;
use injury_check::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let router = match config.analysis.random_seed {
        Some(seed) => {
            warn!(seed, "flavor metrics use a fixed seed; draws repeat across restarts");
            with_analysis_routes(Arc::new(ScoringEngine::new(SeededRandom::new(seed))))
        }
        None => with_analysis_routes(Arc::new(ScoringEngine::new(ThreadRandom))),
    };

    let app = router
        .layer(DefaultBodyLimit::max(config.analysis.max_body_bytes))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_body_bytes = config.analysis.max_body_bytes,
        "injury check service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
