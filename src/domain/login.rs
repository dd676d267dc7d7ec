use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// The serialization within this layer is a dependency leak, but its a pragmatic approach
// Credentials received from the client and forwarded to the auth service untouched.
#[derive(Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Credentials {
    #[serde(deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub password: String,
}

// Non-string values (numbers, null, objects) still reach the auth service,
// which rejects them as bad credentials.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Whatever the auth service answered, kept raw so it can be relayed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthReply {
    pub status: u16,
    // Reason phrase the upstream sent, or the canonical one for `status`.
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl AuthReply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
