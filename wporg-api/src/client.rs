// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! WordPress.org API client
//!
//! Turns domain queries into GET requests against the endpoint registry and
//! decodes the answers. Transport failures, non-2xx statuses and malformed
//! JSON are raised as [`ApiError`]; well-formed answers of the wrong shape
//! come back as `Ok(None)`.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TransportOptions;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::http::HttpTransport;
use crate::transport::{Headers, Request, Transport};
use crate::types::{CoreChecksums, Offer, PluginChecksums, ProjectInfo};

/// Locale used when the caller has no preference.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Client for the WordPress.org APIs.
///
/// Holds only the transport and the options captured at construction, so a
/// single instance can serve any number of calls.
pub struct WpOrgApi<T: Transport = HttpTransport> {
    transport: T,
    options: TransportOptions,
}

impl WpOrgApi<HttpTransport> {
    /// Creates a client backed by the HTTP transport.
    pub fn new(options: TransportOptions) -> ApiResult<Self> {
        let transport = HttpTransport::new(&options)?;
        Ok(Self::with_transport(transport, options))
    }
}

impl<T: Transport> WpOrgApi<T> {
    /// Creates a client over an existing transport.
    pub fn with_transport(transport: T, options: TransportOptions) -> Self {
        Self { transport, options }
    }

    /// Options forwarded with every request.
    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Core file checksums for a release.
    ///
    /// Returns `None` unless the answer is an object whose `checksums` field
    /// is an object. Entries whose value is not a string are skipped, so the
    /// map holds only the path to checksum pairs that could be read.
    pub fn get_core_checksums(
        &self,
        version: &str,
        locale: &str,
    ) -> ApiResult<Option<CoreChecksums>> {
        let url = Endpoint::CoreChecksums
            .url_with_query(&[("version", version), ("locale", locale)])?;
        let body = self.json_get(&url, Headers::new(), TransportOptions::default())?;

        let Some(checksums) = body.get("checksums").and_then(Value::as_object) else {
            warn!(%url, "response has no checksums object");
            return Ok(None);
        };

        let readable = checksums
            .iter()
            .filter_map(|(path, sum)| sum.as_str().map(|sum| (path.clone(), sum.to_string())))
            .collect::<CoreChecksums>();

        let skipped = checksums.len() - readable.len();
        if skipped > 0 {
            warn!(%url, skipped, "skipped non-string checksum entries");
        }
        Ok(Some(readable))
    }

    /// The current update offer for a locale.
    ///
    /// Only the first entry of `offers` is considered. It is returned when its
    /// `locale` equals `locale`; otherwise, or when `offers` is missing or
    /// empty, the result is `None`. Later entries are never searched.
    pub fn get_download_offer(&self, locale: &str) -> ApiResult<Option<Offer>> {
        let url = Endpoint::VersionCheck.url_with_query(&[("locale", locale)])?;
        let body = self.json_get(&url, Headers::new(), TransportOptions::default())?;

        let Some(offers) = body.get("offers").and_then(Value::as_array) else {
            warn!(%url, "response has no offers array");
            return Ok(None);
        };

        let Some(offer) = offers.first().and_then(Value::as_object) else {
            warn!(%url, "first offer is missing or not an object");
            return Ok(None);
        };

        match offer.get("locale").and_then(Value::as_str) {
            Some(offered) if offered == locale => Ok(Some(Offer::from(offer.clone()))),
            offered => {
                warn!(%url, requested = locale, ?offered, "offer locale mismatch");
                Ok(None)
            }
        }
    }

    /// File checksums for a plugin release.
    ///
    /// `plugin` and `version` are inserted into the URL path verbatim and
    /// must not contain `/`, `?`, `#` or other characters with meaning in a
    /// URL. Returns `None` unless the answer has an object or array `files`
    /// field.
    pub fn get_plugin_checksums(
        &self,
        plugin: &str,
        version: &str,
    ) -> ApiResult<Option<PluginChecksums>> {
        let url = format!("{}{}/{}.json", Endpoint::PluginChecksums.url(), plugin, version);
        let body = self.json_get(&url, Headers::new(), TransportOptions::default())?;

        let checksums = body.get("files").and_then(PluginChecksums::from_files);
        if checksums.is_none() {
            warn!(%url, "response has no files object");
        }
        Ok(checksums)
    }

    /// A freshly generated block of secret keys and salts.
    ///
    /// The body is returned trimmed and is never decoded as JSON. An empty
    /// body yields `None`.
    pub fn get_salts(&self) -> ApiResult<Option<String>> {
        let url = Endpoint::SaltGeneration.url();
        let body = self.raw_get(&url, Headers::new(), TransportOptions::default())?;

        if body.is_empty() {
            warn!(%url, "empty salt block");
            return Ok(None);
        }
        Ok(Some(body))
    }

    /// Plugin directory record.
    ///
    /// Returns `None` when the answer is not an object or carries an `error`.
    pub fn get_plugin_info(&self, slug: &str, locale: &str) -> ApiResult<Option<ProjectInfo>> {
        let url = Endpoint::PluginInfo.url_with_query(&[
            ("action", "plugin_information"),
            ("request[slug]", slug),
            ("request[locale]", locale),
        ])?;
        let body = self.json_get(&url, Headers::new(), TransportOptions::default())?;
        Ok(project_info(&url, body))
    }

    /// Theme directory record.
    ///
    /// Returns `None` when the answer is not an object or carries an `error`.
    pub fn get_theme_info(&self, slug: &str, locale: &str) -> ApiResult<Option<ProjectInfo>> {
        let url = Endpoint::ThemeInfo.url_with_query(&[
            ("action", "theme_information"),
            ("request[slug]", slug),
            ("request[locale]", locale),
        ])?;
        let body = self.json_get(&url, Headers::new(), TransportOptions::default())?;
        Ok(project_info(&url, body))
    }

    /// GET expecting a JSON body.
    ///
    /// Adds `Accept: application/json` unless the caller already set an
    /// `Accept` header.
    fn json_get(
        &self,
        url: &str,
        mut headers: Headers,
        options: TransportOptions,
    ) -> ApiResult<Value> {
        if !headers.keys().any(|k| k.eq_ignore_ascii_case("accept")) {
            headers.insert("Accept".to_string(), "application/json".to_string());
        }

        let body = self.raw_get(url, headers, options)?;

        serde_json::from_str(&body).map_err(|source| ApiError::InvalidJson {
            url: url.to_string(),
            source,
        })
    }

    /// GET returning the trimmed body of a successful 2xx response.
    fn raw_get(&self, url: &str, headers: Headers, options: TransportOptions) -> ApiResult<String> {
        let mut options = self.options.merge(&options);
        // Non-2xx answers must come back as responses so they are reported
        // as RequestFailed with their status.
        options.halt_on_error = Some(false);

        let request = Request {
            url: url.to_string(),
            headers,
            options,
        };

        debug!(url, "GET");
        let response = self.transport.get(&request)?;
        debug!(url, status = response.status, success = response.success, "response");

        if !response.success || !(200..300).contains(&response.status) {
            return Err(ApiError::RequestFailed {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(response.body.trim().to_string())
    }
}

fn project_info(url: &str, body: Value) -> Option<ProjectInfo> {
    match body {
        Value::Object(fields) if !fields.contains_key("error") => Some(ProjectInfo::from(fields)),
        Value::Object(fields) => {
            warn!(url, error = ?fields.get("error"), "directory lookup failed");
            None
        }
        _ => {
            warn!(url, "directory response is not an object");
            None
        }
    }
}
