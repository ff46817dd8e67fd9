//! Status flag HTTP server.
//!
//! `GET /aviso?ativo=<token>` optionally updates the sensor status and
//! always answers with `{"status": <bool>}`.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use super::{bind, finish_router, first_param, run, HttpServerConfig, HttpServerError, AVISO_ROUTE};
use crate::adapters::memory::InMemoryStatusStore;
use crate::domain::models::SensorStatus;
use crate::services::StatusFlagService;

/// Query parameter carrying the activation token.
pub const ACTIVATION_PARAM: &str = "ativo";

/// Status flag HTTP server.
pub struct StatusHttpServer {
    config: HttpServerConfig,
    service: StatusFlagService,
}

impl StatusHttpServer {
    /// Server around an existing service.
    pub fn new(service: StatusFlagService, config: HttpServerConfig) -> Self {
        Self { config, service }
    }

    /// Server with a fresh in-memory flag, starting inactive.
    pub fn in_memory(config: HttpServerConfig) -> Self {
        Self::new(
            StatusFlagService::new(Arc::new(InMemoryStatusStore::default())),
            config,
        )
    }

    /// Service backing the routes; clones share its state.
    pub fn service(&self) -> &StatusFlagService {
        &self.service
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route(AVISO_ROUTE, get(report_status))
            .with_state(self.service.clone());

        finish_router(routes, &self.config)
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), HttpServerError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<(), HttpServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = bind(&self.config).await?;
        self.serve_listener(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_listener<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), HttpServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        run("Status", listener, router, shutdown).await
    }
}

async fn report_status(
    State(service): State<StatusFlagService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<SensorStatus> {
    Json(service.report(first_param(&params, ACTIVATION_PARAM)))
}
