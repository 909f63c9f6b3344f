// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Salt block parsing
//!
//! The secret-key endpoint answers with PHP `define()` lines:
//!
//! ```text
//! define('AUTH_KEY',         'p@6z...');
//! define('SECURE_AUTH_KEY',  'Kq!0...');
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static DEFINE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"define\(\s*'([A-Za-z0-9_]+)'\s*,\s*'([^']*)'\s*\)\s*;"#)
        .expect("salt pattern is valid")
});

/// One secret definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Salt {
    /// Constant name, e.g. `AUTH_KEY`.
    pub name: String,
    /// Generated secret value.
    pub value: String,
}

/// Extracts every `define('NAME', 'value');` entry, in order of appearance.
///
/// Lines that do not match are skipped.
pub fn parse_salts(block: &str) -> Vec<Salt> {
    DEFINE_LINE
        .captures_iter(block)
        .map(|caps| Salt {
            name: caps[1].to_string(),
            value: caps[2].to_string(),
        })
        .collect()
}
