// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Theme commands.

use anyhow::{anyhow, Result};
use wporg_api::{Transport, WpOrgApi};

use crate::display;

/// Prints a theme directory record.
pub fn info<T: Transport>(api: &WpOrgApi<T>, slug: &str, locale: &str) -> Result<String> {
    let info = api
        .get_theme_info(slug, locale)?
        .ok_or_else(|| anyhow!("theme {slug} not found"))?;

    display::json(&info)
}
