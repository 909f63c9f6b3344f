// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP transport backed by the blocking reqwest client.
//!
//! Supports:
//! - Request and connect timeouts
//! - HTTP and SOCKS5 proxies (for Tor)
//! - Disabling TLS verification
//! - Custom user agent

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::TransportOptions;
use crate::transport::{Request, Response, Transport, TransportError, TransportResult};

/// User agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("wporg-api/{}", env!("CARGO_PKG_VERSION"))
}

/// Transport issuing real HTTP requests.
///
/// A client is built once for the options given at construction. Requests
/// whose merged options change connection settings get a dedicated client.
pub struct HttpTransport {
    options: TransportOptions,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the given options.
    pub fn new(options: &TransportOptions) -> TransportResult<Self> {
        Ok(Self {
            options: options.clone(),
            client: build_client(options)?,
        })
    }

    fn client_for(&self, options: &TransportOptions) -> TransportResult<Client> {
        if options.same_connection(&self.options) {
            Ok(self.client.clone())
        } else {
            debug!("building dedicated HTTP client for request options");
            build_client(options)
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &Request) -> TransportResult<Response> {
        let client = self.client_for(&request.options)?;

        let mut builder = client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status();

        if request.options.halt_on_error.unwrap_or(false) && !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text()?;

        Ok(Response {
            success: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }
}

fn build_client(options: &TransportOptions) -> TransportResult<Client> {
    let user_agent = options
        .user_agent
        .clone()
        .unwrap_or_else(default_user_agent);
    let mut builder = Client::builder().user_agent(user_agent);

    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = options.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(proxy) = &options.proxy {
        builder = match proxy.to_url() {
            Some(url) => builder.proxy(
                reqwest::Proxy::all(&url)
                    .map_err(|e| TransportError::InvalidProxy(format!("{url}: {e}")))?,
            ),
            None => builder.no_proxy(),
        };
    }
    if options.verify_tls == Some(false) {
        builder = builder.danger_accept_invalid_certs(true);
    }

    Ok(builder.build()?)
}
