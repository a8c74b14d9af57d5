use std::process;
use std::sync::Arc;

use axum::{error_handling::HandleErrorLayer, http::StatusCode};
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use survey_form_service::{
    create_router, AppConfig, AppState, CsvPublisher, LogPublisher, SubmissionPublisher,
};

// Error handler
async fn handle_error(error: BoxError) -> (StatusCode, String) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else if error.is::<tower::load_shed::error::Overloaded>() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Service is overloaded, try again later".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {}", error),
        )
    }
}

/// Resolves on Ctrl+C or SIGTERM. A signal source that can't be installed is
/// logged and never fires, so the other one still stops the server.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C listener unavailable: {}", e);
            std::future::pending::<()>().await;
        }
        "interrupt"
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM listener unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
        "terminate"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    info!("Received {} signal, draining open survey requests", received);
}

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // Pick where accepted submissions go
    let publisher: Arc<dyn SubmissionPublisher> = match &config.csv_path {
        Some(path) => match CsvPublisher::new(path) {
            Ok(publisher) => {
                info!("Submissions will be appended to {}", path.display());
                Arc::new(publisher)
            }
            Err(e) => {
                error!("Failed to open submissions file: {}", e);
                process::exit(1);
            }
        },
        None => {
            info!("No SURVEY_CSV_PATH set - submissions will only be logged");
            Arc::new(LogPublisher)
        }
    };

    // Create shared application state
    let app_state = Arc::new(AppState { publisher });

    let app = create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .load_shed()
            .concurrency_limit(64)
            .timeout(config.request_timeout)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any)),
    );

    info!("Server listening on {}", config.bind_addr);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_addr, e);
            process::exit(1);
        }
    };

    // Start server with graceful shutdown
    info!("Server is ready to accept connections");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        process::exit(1);
    }

    info!("Server has been gracefully shut down");
}
