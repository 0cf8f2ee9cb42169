//! Where the test client sends its requests and which admin token it uses.
use std::net::SocketAddr;

use tripcompare_configuration::HttpApi;

/// Label of the token the test environment uses for the admin routes.
pub const ADMIN_TOKEN_LABEL: &str = "admin";

#[derive(Clone, Debug)]
pub struct ConnectionInfo {
    pub bind_address: SocketAddr,
    /// Sent as `?token=` on every request.
    pub admin_token: Option<String>,
}

impl ConnectionInfo {
    /// An admin using the given token, valid or not.
    pub fn admin(bind_address: SocketAddr, token: &str) -> Self {
        Self {
            bind_address,
            admin_token: Some(token.to_owned()),
        }
    }

    /// A visitor of the public routes.
    pub fn visitor(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            admin_token: None,
        }
    }

    /// The admin of a server running with the given configuration. A server
    /// without access tokens is reached without a token.
    pub fn for_server(bind_address: SocketAddr, http_api: &HttpApi) -> Self {
        match http_api.access_tokens.get(ADMIN_TOKEN_LABEL) {
            Some(token) => Self::admin(bind_address, token),
            None => Self::visitor(bind_address),
        }
    }
}

pub fn admin_with_invalid_token(bind_address: SocketAddr) -> ConnectionInfo {
    ConnectionInfo::admin(bind_address, "invalid token")
}

pub fn visitor(bind_address: SocketAddr) -> ConnectionInfo {
    ConnectionInfo::visitor(bind_address)
}
