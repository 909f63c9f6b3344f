// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! WordPress.org API Client
//!
//! Minimal blocking client for the public WordPress.org distribution APIs:
//! - Core checksums for a release and locale
//! - Plugin checksums for a plugin release
//! - The version-check "offer" for a locale
//! - Freshly generated secret keys and salts
//!
//! Every operation is a single GET round trip. Results use two channels:
//! `Err(ApiError)` when the transport or the response body is broken, and
//! `Ok(None)` when the service answered with valid JSON of the wrong shape.
//!
//! # Example
//!
//! ```ignore
//! use wporg_api::{TransportOptions, WpOrgApi, DEFAULT_LOCALE};
//!
//! let api = WpOrgApi::new(TransportOptions::default())?;
//! if let Some(checksums) = api.get_core_checksums("6.4.3", DEFAULT_LOCALE)? {
//!     println!("{} files", checksums.len());
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod mock;
pub mod salts;
pub mod transport;
pub mod types;

pub use client::{WpOrgApi, DEFAULT_LOCALE};
pub use config::{ProxyConfig, TransportOptions};
pub use endpoint::{Endpoint, API_ROOT, DOWNLOADS_ROOT};
pub use error::{ApiError, ApiResult};
pub use http::HttpTransport;
pub use mock::MockTransport;
pub use salts::{parse_salts, Salt};
pub use transport::{Headers, Request, Response, Transport, TransportError, TransportResult};
pub use types::{CoreChecksums, FileChecksums, Offer, PluginChecksums, ProjectInfo};
