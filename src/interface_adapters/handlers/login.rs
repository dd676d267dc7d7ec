use crate::domain::{Credentials, LoginError};
use crate::interface_adapters::extract::JsonBody;
use crate::interface_adapters::protocol::INVALID_CREDENTIALS;
use crate::interface_adapters::state::AppState;
use crate::use_cases::LoginUseCase;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(
    name = "login",
    skip_all,
    fields(username = %body.username)
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<Credentials>,
) -> Result<Response, (StatusCode, String)> {
    let use_case = LoginUseCase {
        auth: state.auth.as_ref(),
        policy: state.login_policy,
    };

    let reply = use_case.execute(body).await.map_err(map_login_error)?;

    tracing::info!("login accepted by auth service.");

    // Relay the upstream body untouched, keeping its content type.
    let mut response = (StatusCode::OK, reply.body).into_response();
    if let Some(content_type) = reply
        .content_type
        .as_deref()
        .and_then(|value| HeaderValue::from_str(value).ok())
    {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }

    Ok(response)
}

fn map_login_error(err: LoginError) -> (StatusCode, String) {
    match err {
        LoginError::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string())
        }
        LoginError::UpstreamStatus {
            status,
            status_text,
        } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            status_text,
        ),
    }
}
