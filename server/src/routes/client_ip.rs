//! Client address extractor used as the rate-limit key.
//!
//! The first `X-Forwarded-For` hop wins, so deployments behind a proxy key on
//! the real client. Without the header the socket peer address is used, and
//! `unknown` when neither is available (e.g. in-process tests).

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::HeaderMap;
use axum::http::request::Parts;

const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

/// First non-empty hop of `X-Forwarded-For`, if present.
pub(crate) fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("x-forwarded-for")?.to_str().ok()?;
    raw.split(',')
        .map(str::trim)
        .find(|hop| !hop.is_empty())
        .map(str::to_owned)
}

impl<S> axum::extract::FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = forwarded_for(&parts.headers)
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_owned());
        Ok(Self(ip))
    }
}

#[cfg(test)]
#[path = "client_ip_test.rs"]
mod tests;
