//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use hr_gateway::{GatewayConfig, HttpServer, Shutdown};
use serde_json::Value;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";

/// A request as seen by the stub Manager API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

/// Handle to a running stub Manager API.
pub struct StubUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl StubUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/api2", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a stub Manager API that always answers with `status` and `body`.
#[allow(dead_code)]
pub async fn start_stub_upstream(status: u16, body: &'static str) -> StubUpstream {
    start_programmable_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// Start a programmable stub Manager API.
///
/// Every request is recorded before `f` decides the reply.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> StubUpstream
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let f = Arc::new(f);
    let log = requests.clone();
    let app = Router::new().fallback(move |request: Request<Body>| {
        let f = f.clone();
        let log = log.clone();
        async move {
            let recorded = record(request).await;
            log.lock().unwrap().push(recorded.clone());

            let (status, body) = f(recorded).await;
            (
                StatusCode::from_u16(status).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubUpstream { addr, requests }
}

async fn record(request: Request<Body>) -> RecordedRequest {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        api_key: parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&bytes).ok(),
    }
}

/// Gateway configuration pointed at `base_url` with the test API key.
pub fn gateway_config(base_url: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_key = Some(TEST_API_KEY.to_string());
    config
}

/// Start the gateway on an ephemeral port. Returns its URL and shutdown handle.
pub async fn start_gateway(config: GatewayConfig) -> (String, Shutdown) {
    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}
