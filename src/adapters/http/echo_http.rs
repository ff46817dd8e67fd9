//! Message echo HTTP server.
//!
//! `GET /aviso?mensagem=<text>` logs the message and answers `OK`.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use super::{bind, finish_router, first_param, run, HttpServerConfig, HttpServerError, AVISO_ROUTE};
use crate::adapters::tracing_log::TracingMessageLog;
use crate::domain::models::IncomingMessage;
use crate::services::MessageEchoService;

/// Query parameter carrying the message.
pub const MESSAGE_PARAM: &str = "mensagem";

/// Message echo HTTP server.
pub struct EchoHttpServer {
    config: HttpServerConfig,
    service: MessageEchoService,
}

impl EchoHttpServer {
    /// Server around an existing service.
    pub fn new(service: MessageEchoService, config: HttpServerConfig) -> Self {
        Self { config, service }
    }

    /// Server whose messages go to the `tracing` log.
    pub fn with_tracing(config: HttpServerConfig) -> Self {
        Self::new(MessageEchoService::new(Arc::new(TracingMessageLog::new())), config)
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route(AVISO_ROUTE, get(echo_message))
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
        run("Echo", listener, router, shutdown).await
    }
}

async fn echo_message(
    State(service): State<MessageEchoService>,
    Query(params): Query<Vec<(String, String)>>,
) -> &'static str {
    let message = IncomingMessage::from_param(
        first_param(&params, MESSAGE_PARAM).map(ToString::to_string),
    );
    service.receive(&message)
}
