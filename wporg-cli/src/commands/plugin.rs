// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugin commands.

use anyhow::{anyhow, bail, Result};
use tracing::info;
use wporg_api::{Transport, WpOrgApi};

use crate::display;

/// Rejects values that would change the shape of a URL path.
///
/// The checksum endpoint splices slug and version into the path unescaped.
pub fn validate_segment(kind: &str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && !value.starts_with('.')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if !valid {
        bail!("invalid {kind} {value:?}: use letters, digits, '-', '_' and '.' only");
    }
    Ok(())
}

/// Prints the checksums of a plugin release.
pub fn checksums<T: Transport>(api: &WpOrgApi<T>, plugin: &str, version: &str) -> Result<String> {
    validate_segment("plugin slug", plugin)?;
    validate_segment("plugin version", version)?;

    let checksums = api
        .get_plugin_checksums(plugin, version)?
        .ok_or_else(|| anyhow!("no checksums available for {plugin} {version}"))?;

    info!("{} files listed for {} {}", checksums.len(), plugin, version);
    display::json(&checksums)
}

/// Prints a plugin directory record.
pub fn info<T: Transport>(api: &WpOrgApi<T>, slug: &str, locale: &str) -> Result<String> {
    let info = api
        .get_plugin_info(slug, locale)?
        .ok_or_else(|| anyhow!("plugin {slug} not found"))?;

    display::json(&info)
}
