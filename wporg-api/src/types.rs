// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response types
//!
//! The API returns loosely shaped JSON. These types keep the decoded
//! objects intact and add typed accessors for the fields callers use.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Core checksums: file path relative to the install root to checksum.
pub type CoreChecksums = BTreeMap<String, String>;

/// A version-check offer describing one available release.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Offer(Map<String, Value>);

impl Offer {
    /// Locale the offer was built for.
    pub fn locale(&self) -> Option<&str> {
        self.str_field("locale")
    }

    /// Offered release version.
    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    /// Offer kind, e.g. `upgrade` or `latest`.
    pub fn response(&self) -> Option<&str> {
        self.str_field("response")
    }

    /// URL of the full release package.
    pub fn download_url(&self) -> Option<&str> {
        self.str_field("download")
    }

    /// Minimum PHP version required by the release.
    pub fn php_version(&self) -> Option<&str> {
        self.str_field("php_version")
    }

    /// Minimum MySQL version required by the release.
    pub fn mysql_version(&self) -> Option<&str> {
        self.str_field("mysql_version")
    }

    /// Package URL by kind (`full`, `no_content`, `new_bundled`, `partial`, `rollback`).
    ///
    /// Packages the service leaves out are reported as `false` and map to `None`.
    pub fn package(&self, kind: &str) -> Option<&str> {
        self.0
            .get("packages")
            .and_then(|p| p.get(kind))
            .and_then(Value::as_str)
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the offer, returning the JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Offer {
    fn from(map: Map<String, Value>) -> Self {
        Offer(map)
    }
}

/// Checksums listed for one file of a plugin release.
///
/// Keeps the service's entry as received, so fields beyond the hashes
/// (such as `size`) survive and serialize back unchanged. Usually an object
/// with `md5` / `sha256` given as a string or a list of strings; a bare
/// string entry is a single hash of unstated kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FileChecksums(Value);

impl FileChecksums {
    /// Wraps one entry of the `files` value.
    pub fn from_value(value: &Value) -> Self {
        FileChecksums(value.clone())
    }

    /// MD5 hashes; several when the file changed between builds.
    pub fn md5(&self) -> Vec<&str> {
        self.0.get("md5").map(strings).unwrap_or_default()
    }

    /// SHA-256 hashes.
    pub fn sha256(&self) -> Vec<&str> {
        self.0.get("sha256").map(strings).unwrap_or_default()
    }

    /// Every hash in the entry: a bare string entry, or all string values
    /// of an object entry.
    pub fn hashes(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(fields) => fields.values().flat_map(strings).collect(),
            other => strings(other),
        }
    }

    /// True if `hash` is one of the listed MD5 hashes.
    pub fn matches_md5(&self, hash: &str) -> bool {
        self.md5().iter().any(|h| h.eq_ignore_ascii_case(hash))
    }

    /// True if `hash` is one of the listed SHA-256 hashes.
    pub fn matches_sha256(&self, hash: &str) -> bool {
        self.sha256().iter().any(|h| h.eq_ignore_ascii_case(hash))
    }

    /// True if `hash` appears anywhere in the entry.
    pub fn matches(&self, hash: &str) -> bool {
        self.hashes().iter().any(|h| h.eq_ignore_ascii_case(hash))
    }

    /// Raw field access, e.g. `size`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The entry as received.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

fn strings(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Plugin checksums: file path relative to the plugin directory to checksums.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginChecksums {
    files: BTreeMap<String, FileChecksums>,
}

impl PluginChecksums {
    /// Builds the map from the service's `files` value.
    ///
    /// Objects are keyed by path. Arrays are keyed by element index, so an
    /// empty array yields an empty map. Other values yield `None`.
    pub fn from_files(files: &Value) -> Option<Self> {
        let files = match files {
            Value::Object(map) => map
                .iter()
                .map(|(path, entry)| (path.clone(), FileChecksums::from_value(entry)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, entry)| (i.to_string(), FileChecksums::from_value(entry)))
                .collect(),
            _ => return None,
        };
        Some(PluginChecksums { files })
    }

    /// Checksums for one file.
    pub fn get(&self, path: &str) -> Option<&FileChecksums> {
        self.files.get(path)
    }

    /// MD5 hashes listed for a file (empty if unknown).
    pub fn md5(&self, path: &str) -> Vec<&str> {
        self.get(path).map(FileChecksums::md5).unwrap_or_default()
    }

    /// SHA-256 hashes listed for a file (empty if unknown).
    pub fn sha256(&self, path: &str) -> Vec<&str> {
        self.get(path).map(FileChecksums::sha256).unwrap_or_default()
    }

    /// Number of files listed.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files are listed.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over `(path, checksums)` in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileChecksums)> {
        self.files.iter()
    }
}

/// Plugin or theme directory record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectInfo(Map<String, Value>);

impl ProjectInfo {
    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Directory slug.
    pub fn slug(&self) -> Option<&str> {
        self.0.get("slug").and_then(Value::as_str)
    }

    /// Latest released version.
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    /// Download URL of the latest release.
    pub fn download_link(&self) -> Option<&str> {
        self.0.get("download_link").and_then(Value::as_str)
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ProjectInfo {
    fn from(map: Map<String, Value>) -> Self {
        ProjectInfo(map)
    }
}
