//! Optional HTTP Basic authentication for every route.

use super::AppState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse as _, Response};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use tracing::warn;

/// Realm announced in `WWW-Authenticate`.
pub const REALM: &str = "warehouse";

/// The single username and password the server accepts.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    #[must_use]
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials only when both halves are present and non-empty.
    #[must_use]
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        username
            .filter(|user| !user.is_empty())
            .zip(password.filter(|pass| !pass.is_empty()))
            .map(|(user, pass)| Self::new(user, pass))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether an `Authorization` header carries exactly these credentials.
    #[must_use]
    pub fn matches_header(&self, value: &HeaderValue) -> bool {
        decode_basic(value)
            .is_some_and(|(user, pass)| user == self.username && pass == self.password)
    }
}

/// `Basic <base64(user:pass)>`, with the scheme matched case-insensitively.
fn decode_basic(value: &HeaderValue) -> Option<(String, String)> {
    let text = value.to_str().ok()?;
    let (scheme, encoded) = text.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let pair = String::from_utf8(decoded).ok()?;
    let (user, pass) = pair.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{REALM}\""))],
        "Authentication required",
    )
        .into_response()
}

/// Middleware rejecting requests without valid credentials when the server
/// has any configured.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(credentials) = state.credentials.as_deref() else {
        return next.run(request).await;
    };
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| credentials.matches_header(value));
    if authorized {
        next.run(request).await
    } else {
        warn!(path = %request.uri().path(), "Rejected request without valid credentials");
        unauthorized()
    }
}
