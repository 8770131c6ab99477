//! HTTP server with graceful shutdown

use axum::{extract::DefaultBodyLimit, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::Config,
    error::Result,
    middleware::{request_id_layer, request_id_propagation_layer, sensitive_headers_layer},
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bind the configured port and serve until SIGINT/SIGTERM
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.listen_addr();
        let listener = TcpListener::bind(&addr).await?;
        self.serve_with_shutdown(listener, app, shutdown_signal())
            .await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are drained before this returns.
    pub async fn serve_with_shutdown<F>(
        self,
        listener: TcpListener,
        app: Router,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Starting {} on {}", self.config.service.name, addr);
        self.log_middleware_config();

        let app = self.apply_layers(app);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Wrap `app` in the middleware stack
    ///
    /// The last layer added is the outermost; panic recovery sits closest to the handlers.
    pub fn apply_layers(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;

        let mut app = app
            .layer(CatchPanicLayer::new())
            .layer(request_id_propagation_layer())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(sensitive_headers_layer())
            .layer(request_id_layer())
            // tower-http enforces the limit; axum's own 2 MB default would undercut it
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(middleware.body_limit_bytes()))
            .layer(TimeoutLayer::with_status_code(
                http::StatusCode::REQUEST_TIMEOUT,
                self.config.service.timeout(),
            ));

        if middleware.compression {
            app = app.layer(CompressionLayer::new());
        }

        app.layer(self.build_cors_layer())
    }

    /// Log middleware configuration for debugging
    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;
        tracing::info!("Middleware configuration:");
        tracing::info!("  - Panic recovery: enabled");
        tracing::info!("  - Request ID tracking: enabled");
        tracing::info!("  - Sensitive header masking: enabled");
        tracing::info!("  - Request body limit: {} MB", middleware.body_limit_mb);
        tracing::info!(
            "  - Compression: {}",
            if middleware.compression { "enabled" } else { "disabled" }
        );
        tracing::info!("  - CORS mode: {}", middleware.cors_mode);
        tracing::info!(
            "  - Request timeout: {} seconds",
            self.config.service.timeout_secs
        );
    }

    /// Build CORS layer based on configuration
    fn build_cors_layer(&self) -> CorsLayer {
        match self.config.middleware.cors_mode.as_str() {
            "permissive" => {
                tracing::debug!("Enabling permissive CORS");
                CorsLayer::permissive()
            }
            "restrictive" => {
                tracing::debug!("Enabling restrictive CORS (default deny)");
                CorsLayer::new()
            }
            "disabled" => {
                tracing::debug!("CORS disabled (using restrictive)");
                CorsLayer::new()
            }
            other => {
                tracing::warn!("Unknown CORS mode: {}, defaulting to permissive", other);
                CorsLayer::permissive()
            }
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Shutdown signal received, draining requests...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::router, state::AppState, store::InMemoryStore};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    fn app(config: Config) -> Router {
        router(AppState::new(config, InMemoryStore::new()))
    }

    #[test]
    fn test_server_creation() {
        let config = Config::default();
        let server = Server::new(config.clone());
        assert_eq!(server.config().service.port, config.service.port);
    }

    #[tokio::test]
    async fn test_layers_add_request_id() {
        let config = Config::default();
        let layered = Server::new(config.clone()).apply_layers(app(config));

        let response = layered
            .oneshot(
                Request::builder()
                    .uri("/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers()["x-request-id"].to_str().unwrap();
        assert!(id.starts_with("req_"));
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let mut config = Config::default();
        config.middleware.body_limit_mb = 0;
        let layered = Server::new(config.clone()).apply_layers(app(config));

        let body = r#"{"title":"Dune","author":"Herbert"}"#;
        let response = layered
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/books")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_serves_over_tcp_and_shuts_down() {
        let config = Config::default();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = Server::new(config.clone());
        let handle = tokio::spawn(server.serve_with_shutdown(listener, app(config), async {
            let _ = rx.await;
        }));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /books/unknown-id HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 404"));
        assert!(raw.contains(r#"{"error":"Book not found"}"#));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
