// Stand-in for the catalog/auth service so HTTP tests need no network.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use hyper::ext::ReasonPhrase;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

pub const VALID_USERNAME: &str = "emilys";
pub const VALID_PASSWORD: &str = "emilyspass";
pub const STUB_TOKEN: &str = "stub-access-token";
// Non-canonical phrase sent with the 202 login reply.
pub const QUEUED_REASON: &str = "Queued For Review";
// How long the /slow routes stall before answering.
pub const SLOW_REPLY: Duration = Duration::from_secs(2);

#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

pub fn stub_products() -> Value {
    json!([
        { "id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99 },
        { "id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99 }
    ])
}

fn app() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async { Json(json!({ "products": stub_products(), "total": 2 })) }),
        )
        .route(
            "/broken/products",
            get(|| async { Json(json!({ "total": 0 })) }),
        )
        .route(
            "/down/products",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/auth/login", post(login))
        .route(
            "/forbidden/auth/login",
            post(|| async {
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "message": "Account locked" })),
                )
            }),
        )
        .route(
            "/slow/products",
            get(|| async {
                tokio::time::sleep(SLOW_REPLY).await;
                Json(json!({ "products": stub_products() }))
            }),
        )
        .route(
            "/slow/auth/login",
            post(|Json(body): Json<LoginRequest>| async move {
                tokio::time::sleep(SLOW_REPLY).await;
                login(Json(body)).await
            }),
        )
        .route("/queued/auth/login", post(queued_login))
}

async fn queued_login() -> Response {
    let mut res = (StatusCode::ACCEPTED, Json(json!({ "queued": true }))).into_response();
    res.extensions_mut()
        .insert(ReasonPhrase::from_static(QUEUED_REASON.as_bytes()));
    res
}

async fn login(Json(body): Json<LoginRequest>) -> (StatusCode, Json<Value>) {
    let valid = body.username.as_deref() == Some(VALID_USERNAME)
        && body.password.as_deref() == Some(VALID_PASSWORD);

    if valid {
        (
            StatusCode::OK,
            Json(json!({
                "id": 1,
                "username": VALID_USERNAME,
                "accessToken": STUB_TOKEN,
                "refreshToken": "stub-refresh-token"
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

// Serve the stub on an ephemeral port and return its base URL.
pub async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app()).await.expect("stub upstream failed");
    });
    format!("http://{addr}")
}
