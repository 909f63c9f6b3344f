// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport options
//!
//! Options captured by the client at construction and forwarded with every
//! request. Unset fields leave the transport's own defaults in place.

use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable holding a proxy URL.
pub const ENV_PROXY: &str = "WPORG_PROXY";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "WPORG_TIMEOUT_SECS";
/// Environment variable holding the connect timeout in seconds.
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "WPORG_CONNECT_TIMEOUT_SECS";
/// Environment variable disabling TLS verification when truthy.
pub const ENV_INSECURE: &str = "WPORG_INSECURE";
/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "WPORG_USER_AGENT";

/// Proxy configuration for outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProxyConfig {
    /// Direct connection, ignoring any system proxy.
    #[default]
    None,
    /// HTTP(S) proxy given by URL.
    Http {
        /// Proxy URL, e.g. `http://proxy.local:3128`
        url: String,
    },
    /// SOCKS5 proxy (used for Tor).
    Socks5 {
        /// Proxy host address.
        host: String,
        /// Proxy port.
        port: u16,
        /// Optional username for authentication.
        username: Option<String>,
        /// Optional password for authentication.
        password: Option<String>,
    },
}

impl ProxyConfig {
    /// SOCKS5 proxy for a local Tor daemon (127.0.0.1:9050).
    pub fn tor_default() -> Self {
        ProxyConfig::socks5("127.0.0.1", 9050)
    }

    /// Custom SOCKS5 proxy without authentication.
    pub fn socks5(host: &str, port: u16) -> Self {
        ProxyConfig::Socks5 {
            host: host.to_string(),
            port,
            username: None,
            password: None,
        }
    }

    /// HTTP proxy.
    pub fn http(url: &str) -> Self {
        ProxyConfig::Http {
            url: url.to_string(),
        }
    }

    /// Returns true if this is a Tor-compatible proxy.
    pub fn is_tor(&self) -> bool {
        matches!(
            self,
            ProxyConfig::Socks5 {
                port: 9050 | 9150,
                ..
            }
        )
    }

    /// Proxy URL as understood by the HTTP client, `None` for direct connections.
    pub fn to_url(&self) -> Option<String> {
        match self {
            ProxyConfig::None => None,
            ProxyConfig::Http { url } => Some(url.clone()),
            ProxyConfig::Socks5 {
                host,
                port,
                username,
                password,
            } => Some(match (username, password) {
                (Some(user), Some(pass)) => format!("socks5h://{user}:{pass}@{host}:{port}"),
                (Some(user), None) => format!("socks5h://{user}@{host}:{port}"),
                (None, Some(pass)) => format!("socks5h://:{pass}@{host}:{port}"),
                (None, None) => format!("socks5h://{host}:{port}"),
            }),
        }
    }
}

impl FromStr for ProxyConfig {
    type Err = ApiError;

    /// Parses `none`, `http(s)://...` or `socks5(h)://[user[:pass]@]host:port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(ProxyConfig::None);
        }

        let url = Url::parse(s)
            .map_err(|e| ApiError::Configuration(format!("invalid proxy URL {s:?}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(ProxyConfig::Http { url: s.to_string() }),
            "socks5" | "socks5h" => {
                let host = url
                    .host_str()
                    .ok_or_else(|| ApiError::Configuration(format!("proxy {s:?} has no host")))?;
                let port = url.port().unwrap_or(1080);
                let username = Some(url.username())
                    .filter(|u| !u.is_empty())
                    .map(str::to_string);
                if username.is_none() && url.password().is_some() {
                    return Err(ApiError::Configuration(format!(
                        "proxy {s:?} has a password but no username"
                    )));
                }
                Ok(ProxyConfig::Socks5 {
                    host: host.to_string(),
                    port,
                    username,
                    password: url.password().map(str::to_string),
                })
            }
            other => Err(ApiError::Configuration(format!(
                "unsupported proxy scheme {other:?}"
            ))),
        }
    }
}

/// Options forwarded to the transport with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Total request timeout.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub connect_timeout: Option<Duration>,
    /// Proxy to route requests through.
    pub proxy: Option<ProxyConfig>,
    /// Verify TLS certificates.
    pub verify_tls: Option<bool>,
    /// User agent sent with requests.
    pub user_agent: Option<String>,
    /// Make the transport fail on non-2xx statuses instead of returning them.
    pub halt_on_error: Option<bool>,
}

impl TransportOptions {
    /// Set the total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route requests through a proxy.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Route requests through a local Tor daemon.
    ///
    /// Raises the timeout to 60 seconds to account for Tor latency.
    pub fn with_tor(mut self) -> Self {
        self.proxy = Some(ProxyConfig::tor_default());
        self.timeout = Some(Duration::from_secs(60));
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Overlay `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(&self, overrides: &TransportOptions) -> TransportOptions {
        TransportOptions {
            timeout: overrides.timeout.or(self.timeout),
            connect_timeout: overrides.connect_timeout.or(self.connect_timeout),
            proxy: overrides.proxy.clone().or_else(|| self.proxy.clone()),
            verify_tls: overrides.verify_tls.or(self.verify_tls),
            user_agent: overrides
                .user_agent
                .clone()
                .or_else(|| self.user_agent.clone()),
            halt_on_error: overrides.halt_on_error.or(self.halt_on_error),
        }
    }

    /// True when both option sets would build the same HTTP client.
    ///
    /// `halt_on_error` is applied per response and does not count.
    pub fn same_connection(&self, other: &TransportOptions) -> bool {
        self.timeout == other.timeout
            && self.connect_timeout == other.connect_timeout
            && self.proxy == other.proxy
            && self.verify_tls == other.verify_tls
            && self.user_agent == other.user_agent
    }

    /// Load options from the `WPORG_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = TransportOptions::default();

        if let Some(proxy) = lookup(ENV_PROXY) {
            options.proxy = Some(proxy.parse()?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            options.timeout = Some(parse_secs(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(secs) = lookup(ENV_CONNECT_TIMEOUT_SECS) {
            options.connect_timeout = Some(parse_secs(ENV_CONNECT_TIMEOUT_SECS, &secs)?);
        }
        if let Some(flag) = lookup(ENV_INSECURE) {
            if is_truthy(&flag) {
                options.verify_tls = Some(false);
            }
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|a| !a.trim().is_empty()) {
            options.user_agent = Some(agent);
        }

        Ok(options)
    }
}

fn parse_secs(key: &str, value: &str) -> ApiResult<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ApiError::Configuration(format!("{key} must be whole seconds, got {value:?}")))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
