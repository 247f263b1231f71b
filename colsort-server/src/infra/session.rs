//! Cookie-carried session identity for sort-state storage.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header, request::Parts},
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "colsort_session";

/// Session of the current request.
///
/// Taken from the session cookie when it holds a valid UUID; otherwise a
/// fresh one is minted and must be handed back with [`SessionId::set_cookie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId {
    id: Uuid,
    minted: bool,
}

impl SessionId {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match cookie_value(headers, SESSION_COOKIE).and_then(|raw| Uuid::parse_str(raw).ok()) {
            Some(id) => Self { id, minted: false },
            None => Self {
                id: Uuid::new_v4(),
                minted: true,
            },
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.minted
    }

    /// `Set-Cookie` value for a freshly minted session.
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        if !self.minted {
            return None;
        }
        let cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.id
        );
        HeaderValue::from_str(&cookie).ok()
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}
