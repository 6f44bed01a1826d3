//! Web layer
//!
//! Axum router, shared handler state and the HTTP server lifecycle.

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::{
    config::Config,
    database::{Database, repositories::ChannelSeaOrmRepository},
    services::ChannelService,
};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod utils;

pub use extractors::{RequestContext, ValidatedJson};
pub use responses::{ApiResponse, handle_error};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub channel_service: Arc<ChannelService>,
}

impl AppState {
    /// Wire the service graph on top of an open database
    pub fn new(database: Database) -> Self {
        let repository = Arc::new(ChannelSeaOrmRepository::new(database.connection()));
        let channel_service = Arc::new(ChannelService::new(repository));

        Self {
            database,
            channel_service,
        }
    }
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, database: Database) -> Result<Self> {
        let addr: SocketAddr = config
            .bind_address()
            .parse()
            .with_context(|| format!("Invalid listen address: {}", config.bind_address()))?;

        let app = create_router(AppState::new(database));

        Ok(Self { app, addr })
    }

    /// Serve with a notification when the server is actually listening or fails to bind
    ///
    /// Runs until SIGINT or SIGTERM, then drains in-flight requests.
    pub async fn serve_with_signal(
        self,
        ready_signal: tokio::sync::oneshot::Sender<Result<()>>,
    ) -> Result<()> {
        let listener = match tokio::net::TcpListener::bind(&self.addr).await {
            Ok(listener) => listener,
            Err(bind_error) => {
                let bind_err_msg = format!("Failed to bind to {}: {}", self.addr, bind_error);
                let _ = ready_signal.send(Err(anyhow::anyhow!("{}", bind_err_msg)));
                return Err(anyhow::anyhow!("{}", bind_err_msg));
            }
        };

        let _ = ready_signal.send(Ok(()));
        info!("Web server listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server terminated unexpectedly")?;

        info!("Web server stopped");
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(openapi_routes())
        .merge(channel_routes())
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .with_state(state)
}

/// OpenAPI documentation routes, serving both /docs and /api/openapi.json
fn openapi_routes() -> Router<AppState> {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new("/docs").url("/api/openapi.json", openapi::openapi_spec()))
}

fn channel_routes() -> Router<AppState> {
    use handlers::channels;

    Router::new()
        .route(
            "/channels",
            get(channels::list_channels).post(channels::create_channel),
        )
        .route(
            "/channels/{id}",
            get(channels::get_channel)
                .put(channels::update_channel)
                .delete(channels::delete_channel),
        )
}

/// Resolves on the first SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received SIGINT (Ctrl+C), shutting down gracefully");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, shutting down gracefully");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
