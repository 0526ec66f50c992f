//! Thin JSON adapter over [`AttendanceService`], plus the QR refresh timer.
//!
//! | Method | Path               | Operation      |
//! |--------|--------------------|----------------|
//! | GET    | `/api/students`    | list students  |
//! | POST   | `/api/absen`       | check in       |
//! | GET    | `/api/rekap`       | daily recap    |
//! | GET    | `/api/time-status` | window status  |
//!
//! Store access and QR encoding are blocking; handlers push them onto the
//! blocking pool so the runtime threads stay free.

pub mod error;
pub mod routes;

use crate::context::AppContext;
use crate::core::AttendanceService;
use crate::core::qr::run_refresh_loop;
use crate::errors::AppResult;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub use routes::{CheckInRequest, CheckInResponse, StudentIdInput};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub service: Arc<AttendanceService>,
}

pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/students", get(routes::students_handler))
        .route("/api/absen", post(routes::check_in_handler))
        .route("/api/rekap", get(routes::recap_handler))
        .route("/api/time-status", get(routes::time_status_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind, spawn the QR refresh loop, serve until Ctrl+C / SIGTERM.
pub async fn serve(ctx: &AppContext) -> AppResult<()> {
    info!("Initializing store...");
    let store = ctx.store()?;
    let service = Arc::new(ctx.service_with(Arc::clone(&store))?);
    let refresher = Arc::new(ctx.refresher_with(store)?);
    let schedule = ctx.config.refresh_schedule()?;

    let qr_task = tokio::spawn(run_refresh_loop(refresher, schedule));

    let app = router(ApiState { service });

    let address = format!("0.0.0.0:{}", ctx.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    qr_task.abort();
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
