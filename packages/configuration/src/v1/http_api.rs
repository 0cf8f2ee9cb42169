use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::AccessTokens;

/// Configuration for the REST API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// The address the API will bind to. Use port `0` to let the operating
    /// system pick a free port.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: SocketAddr,

    /// Tokens accepted on the admin routes, keyed by label. When the map is
    /// empty the admin routes are open.
    #[serde(default = "HttpApi::default_access_tokens")]
    pub access_tokens: AccessTokens,

    /// Origins allowed by the CORS layer. `*` allows any origin.
    #[serde(default = "HttpApi::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Whether the API runs behind a reverse proxy. When it does, the client
    /// IP stored in the search and click logs is the right-most
    /// `X-Forwarded-For` address. Otherwise the header is ignored and the
    /// connection address is used.
    #[serde(default = "HttpApi::default_on_reverse_proxy")]
    pub on_reverse_proxy: bool,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            access_tokens: Self::default_access_tokens(),
            cors_origins: Self::default_cors_origins(),
            on_reverse_proxy: Self::default_on_reverse_proxy(),
        }
    }
}

impl HttpApi {
    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8000)
    }

    fn default_access_tokens() -> AccessTokens {
        [(String::from("admin"), String::from("MyAccessToken"))]
            .iter()
            .cloned()
            .collect()
    }

    fn default_cors_origins() -> Vec<String> {
        vec![
            String::from("http://localhost:3000"),
            String::from("http://localhost:5173"),
            String::from("*"),
        ]
    }

    fn default_on_reverse_proxy() -> bool {
        false
    }

    pub fn override_admin_token(&mut self, api_admin_token: &str) {
        self.access_tokens.insert("admin".to_string(), api_admin_token.to_string());
    }

    /// Whether the admin routes require a token.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        !self.access_tokens.is_empty()
    }

    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.access_tokens.values().any(|t| t == token)
    }
}
