// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod upstream;

use shop_gateway::GatewayConfig;
use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
    time::Duration,
};

// Static frontend shipped with the crate.
pub fn public_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
}

// Config aimed at a stub upstream, with no static pages in front of the API.
pub fn config_for_upstream(upstream_base: &str) -> GatewayConfig {
    GatewayConfig {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/no-static-dir")),
        products_url: format!("{upstream_base}/products"),
        login_url: format!("{upstream_base}/auth/login"),
        upstream_timeout_ms: Some(2_000),
        ..GatewayConfig::default()
    }
}

// Run a gateway on an ephemeral port inside the current test runtime.
pub async fn spawn_gateway(config: GatewayConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        shop_gateway::run(listener, config)
            .await
            .expect("gateway failed");
    });
    format!("http://{addr}")
}

// Global base URL shared by the browser scenarios.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the server bootstrap path runs only once.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Return the gateway the browser should drive. Uses GATEWAY_BASE_URL when set,
// otherwise boots one gateway (real upstream, bundled frontend) for the whole binary.
pub fn ensure_live_gateway() -> &'static str {
    SERVER_READY.get_or_init(|| {
        if let Ok(url) = std::env::var("GATEWAY_BASE_URL") {
            let _ = SERVER_URL.set(url.trim_end_matches('/').to_string());
            return;
        }

        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));
                let config = GatewayConfig {
                    static_dir: public_dir(),
                    ..GatewayConfig::default()
                };
                shop_gateway::run(listener, config)
                    .await
                    .expect("gateway failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for URL publication and then for the socket to accept TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("gateway did not become ready in time");
}
