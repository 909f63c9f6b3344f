// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Endpoint registry
//!
//! Fixed hosts and path templates of the WordPress.org APIs.

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Root of the main API host.
pub const API_ROOT: &str = "https://api.wordpress.org";

/// Root of the downloads host.
pub const DOWNLOADS_ROOT: &str = "https://downloads.wordpress.org";

/// Known WordPress.org endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Core file checksums for a release
    CoreChecksums,
    /// Plugin file checksums (path prefix, plugin slug and version follow)
    PluginChecksums,
    /// Secret key and salt generator
    SaltGeneration,
    /// Core version check / update offers
    VersionCheck,
    /// Plugin directory information
    PluginInfo,
    /// Theme directory information
    ThemeInfo,
}

impl Endpoint {
    /// Host this endpoint lives on.
    pub fn root(&self) -> &'static str {
        match self {
            Endpoint::PluginChecksums => DOWNLOADS_ROOT,
            _ => API_ROOT,
        }
    }

    /// Path template relative to the host root.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CoreChecksums => "/core/checksums/1.0/",
            Endpoint::PluginChecksums => "/plugin-checksums/",
            Endpoint::SaltGeneration => "/secret-key/1.1/salt/",
            Endpoint::VersionCheck => "/core/version-check/1.7/",
            Endpoint::PluginInfo => "/plugins/info/1.2/",
            Endpoint::ThemeInfo => "/themes/info/1.2/",
        }
    }

    /// Full URL without query string.
    pub fn url(&self) -> String {
        format!("{}{}", self.root(), self.path())
    }

    /// Full URL with form-encoded query parameters, in the given order.
    pub fn url_with_query(&self, params: &[(&str, &str)]) -> ApiResult<String> {
        let base = self.url();
        let url = Url::parse_with_params(&base, params)
            .map_err(|source| ApiError::InvalidUrl { url: base, source })?;
        Ok(url.into())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}
