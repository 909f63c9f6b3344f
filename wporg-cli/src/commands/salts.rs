// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Salts command.

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use wporg_api::{parse_salts, Salt, Transport, WpOrgApi};

use crate::display;

/// Output format for generated salts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SaltFormat {
    /// PHP `define()` lines, as served
    Php,
    /// Shell `NAME='value'` assignments
    Env,
    /// JSON array of name/value objects
    Json,
}

/// Fetches a salt block and renders it in `format`.
pub fn run<T: Transport>(api: &WpOrgApi<T>, format: SaltFormat) -> Result<String> {
    let block = api
        .get_salts()?
        .ok_or_else(|| anyhow!("salt service returned an empty block"))?;

    render(&block, format)
}

fn render(block: &str, format: SaltFormat) -> Result<String> {
    if format == SaltFormat::Php {
        return Ok(block.to_string());
    }

    let salts = parse_salts(block);
    if salts.is_empty() {
        bail!("salt block contains no definitions");
    }

    match format {
        SaltFormat::Json => display::json(&salts),
        _ => Ok(salts.iter().map(env_line).collect::<Vec<_>>().join("\n")),
    }
}

fn env_line(salt: &Salt) -> String {
    format!("{}='{}'", salt.name, salt.value.replace('\'', r"'\''"))
}
