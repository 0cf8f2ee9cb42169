//! Axum [`extractor`](axum::extract) for the request metadata stored with
//! searches and clicks.
//!
//! Given this request chain:
//!
//! ```text
//! client      <-> reverse proxy              <-> API
//! ip: 126.0.0.1   ip: 126.0.0.2                  ip: 126.0.0.3
//!                 X-Forwarded-For: 126.0.0.1
//! ```
//!
//! The client IP is `126.0.0.1`, the right-most `X-Forwarded-For` address,
//! when [`on_reverse_proxy`](tripcompare_configuration::HttpApi::on_reverse_proxy)
//! is enabled. Otherwise the header is ignored, because any client can set
//! it, and the IP is the one of the connection (`126.0.0.2`). The session id
//! comes from the `session_id` cookie.
//!
//! The extractor never rejects a request. Missing values are `None`.
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRef, FromRequestParts};
use axum::http::header::{REFERER, USER_AGENT};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use axum::response::Response;
use axum_client_ip::RightmostXForwardedFor;
use axum_extra::extract::CookieJar;

use crate::core::tracking::ClientInfo;
use crate::core::Backend;

pub const SESSION_COOKIE: &str = "session_id";

/// Extractor for the [`ClientInfo`].
pub struct ExtractClientInfo(pub ClientInfo);

/// Candidate client IPs found in the request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ClientIpSources {
    pub right_most_x_forwarded_for: Option<IpAddr>,
    pub connection_info_ip: Option<IpAddr>,
}

/// The client IP for the given reverse proxy setting.
#[must_use]
pub fn resolve_client_ip(on_reverse_proxy: bool, sources: &ClientIpSources) -> Option<IpAddr> {
    if on_reverse_proxy {
        sources.right_most_x_forwarded_for.or(sources.connection_info_ip)
    } else {
        sources.connection_info_ip
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ExtractClientInfo
where
    Arc<Backend>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let on_reverse_proxy = Arc::<Backend>::from_ref(state).config().http_api.on_reverse_proxy;

        let sources = ClientIpSources {
            right_most_x_forwarded_for: match RightmostXForwardedFor::from_request_parts(parts, state).await {
                Ok(right_most_x_forwarded_for) => Some(right_most_x_forwarded_for.0),
                Err(_) => None,
            },
            connection_info_ip: match ConnectInfo::<SocketAddr>::from_request_parts(parts, state).await {
                Ok(connection_info_socket_addr) => Some(connection_info_socket_addr.0.ip()),
                Err(_) => None,
            },
        };

        let session_id = CookieJar::from_headers(&parts.headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned());

        Ok(ExtractClientInfo(ClientInfo {
            ip_address: resolve_client_ip(on_reverse_proxy, &sources).map(|ip| ip.to_string()),
            user_agent: header_value(&parts.headers, &USER_AGENT),
            referrer: header_value(&parts.headers, &REFERER),
            session_id,
        }))
    }
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}
