//! Test server harness for integration tests.
//!
//! Spins up a real Axum server on a random port so tests can talk to it
//! over HTTP.

use std::net::SocketAddr;

use chart_server::{build_router, AppState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A test server instance with control handles.
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a random available port.
    ///
    /// # Panics
    ///
    /// Panics if no port is available or server fails to bind.
    pub async fn start() -> Self {
        let port = portpicker::pick_unused_port().expect("no available port");
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        let app = build_router(AppState::default());

        let listener = TcpListener::bind(addr).await.expect("failed to bind");
        let actual_addr = listener.local_addr().expect("failed to get local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("server error");
        });

        // Give the server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr: actual_addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// Get the server's socket address.
    #[allow(dead_code)]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL of the SVG chart endpoint with the given raw query.
    pub fn chart_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("http://{}/chart.svg", self.addr)
        } else {
            format!("http://{}/chart.svg?{query}", self.addr)
        }
    }

    /// URL of the JSON chart endpoint with the given raw query.
    pub fn json_url(&self, query: &str) -> String {
        format!("http://{}/chart.json?{query}", self.addr)
    }

    /// URL of the readiness probe.
    #[allow(dead_code)]
    pub fn health_url(&self) -> String {
        format!("http://{}/health", self.addr)
    }

    /// Gracefully shut down the server.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(tokio::time::Duration::from_secs(5), self.handle).await;
    }
}
