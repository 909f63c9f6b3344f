// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core release commands.

use anyhow::{anyhow, Result};
use tracing::info;
use wporg_api::{Transport, WpOrgApi};

use crate::display;

/// Prints the checksum map of a core release.
pub fn checksums<T: Transport>(api: &WpOrgApi<T>, version: &str, locale: &str) -> Result<String> {
    let checksums = api
        .get_core_checksums(version, locale)?
        .ok_or_else(|| anyhow!("no checksums available for WordPress {version} ({locale})"))?;

    info!("{} core files listed for {} ({})", checksums.len(), version, locale);
    display::json(&checksums)
}

/// Prints the update offer for a locale.
pub fn offer<T: Transport>(api: &WpOrgApi<T>, locale: &str) -> Result<String> {
    let offer = api
        .get_download_offer(locale)?
        .ok_or_else(|| anyhow!("no update offer for locale {locale}"))?;

    display::json(&offer)
}
