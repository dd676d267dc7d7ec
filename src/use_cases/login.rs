use crate::domain::{AuthProvider, AuthReply, Credentials, LoginError};

// How non-200 replies from the auth service reach the client.
//
// `CollapseToUnauthorized` reproduces the established behaviour: only 2xx replies
// other than 200 keep their status, everything else becomes a plain 401.
// `RelayUpstreamStatus` passes every non-200 status through with its reason text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPolicy {
    #[default]
    CollapseToUnauthorized,
    RelayUpstreamStatus,
}

impl LoginPolicy {
    pub fn from_relay_flag(relay: bool) -> Self {
        if relay {
            LoginPolicy::RelayUpstreamStatus
        } else {
            LoginPolicy::CollapseToUnauthorized
        }
    }
}

// Login use case with the auth provider injected.
pub struct LoginUseCase<'a, A: ?Sized> {
    pub auth: &'a A,
    pub policy: LoginPolicy,
}

impl<A> LoginUseCase<'_, A>
where
    A: AuthProvider + ?Sized,
{
    pub async fn execute(&self, credentials: Credentials) -> Result<AuthReply, LoginError> {
        let reply = self.auth.authenticate(credentials).await.map_err(|err| {
            tracing::error!(error = %err, "login error");
            LoginError::InvalidCredentials
        })?;

        if reply.is_ok() {
            return Ok(reply);
        }

        let success = (200..300).contains(&reply.status);
        match self.policy {
            LoginPolicy::CollapseToUnauthorized if !success => {
                tracing::warn!(
                    upstream_status = reply.status,
                    "auth service rejected login; answering 401"
                );
                Err(LoginError::InvalidCredentials)
            }
            _ => Err(LoginError::UpstreamStatus {
                status: reply.status,
                status_text: reply.status_text,
            }),
        }
    }
}
