// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration
//!
//! Connection settings come from the `WPORG_*` environment variables first;
//! command-line flags override them.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use wporg_api::{ProxyConfig, TransportOptions};

/// Connection flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Proxy URL (http://, https://, socks5://) or "none"
    #[arg(long, global = true, conflicts_with = "tor")]
    pub proxy: Option<String>,

    /// Route requests through a local Tor daemon (127.0.0.1:9050)
    #[arg(long, global = true)]
    pub tor: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Connect timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Do not verify TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// User agent to send
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

impl ConnectionArgs {
    /// Options from the environment with flags applied on top.
    pub fn to_options(&self) -> Result<TransportOptions> {
        let env = TransportOptions::from_env().context("invalid WPORG_* environment")?;
        self.apply(env)
    }

    /// Applies the flags to `base`.
    pub fn apply(&self, base: TransportOptions) -> Result<TransportOptions> {
        let mut options = if self.tor { base.with_tor() } else { base };

        if let Some(proxy) = &self.proxy {
            let proxy: ProxyConfig = proxy.parse().context("invalid --proxy")?;
            options = options.with_proxy(proxy);
        }
        if let Some(secs) = self.timeout {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout {
            options = options.with_connect_timeout(Duration::from_secs(secs));
        }
        if self.insecure {
            options = options.with_verify_tls(false);
        }
        if let Some(agent) = &self.user_agent {
            options = options.with_user_agent(agent);
        }

        Ok(options)
    }
}
