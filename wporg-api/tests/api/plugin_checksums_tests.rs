// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for plugin checksums

use super::{mock_api, only_url};
use serde_json::json;

#[test]
fn test_plugin_checksums_url_is_not_encoded() {
    let api = mock_api();
    api.transport().queue_body(r#"{"files": {}}"#);

    api.get_plugin_checksums("akismet", "5.3").unwrap();

    assert_eq!(
        only_url(&api),
        "https://downloads.wordpress.org/plugin-checksums/akismet/5.3.json"
    );
}

#[test]
fn test_plugin_checksums_returns_metadata() {
    let api = mock_api();
    api.transport().queue_body(
        r#"{
            "plugin": "akismet",
            "version": "5.3",
            "source": "https://downloads.wordpress.org/plugin/akismet.5.3.zip",
            "zip": "https://downloads.wordpress.org/plugins/akismet.5.3.zip",
            "files": {
                "akismet.php": {"md5": "aaa", "sha256": "bbb"},
                "readme.txt": {"md5": ["ccc", "ddd"], "sha256": ["eee", "fff"]}
            }
        }"#,
    );

    let checksums = api.get_plugin_checksums("akismet", "5.3").unwrap().unwrap();

    assert_eq!(checksums.len(), 2);
    assert_eq!(checksums.md5("akismet.php"), ["aaa"]);
    assert_eq!(checksums.sha256("readme.txt"), ["eee", "fff"]);
    assert!(checksums.get("readme.txt").unwrap().matches_md5("ddd"));
    assert!(checksums.md5("missing.php").is_empty());
}

#[test]
fn test_plugin_checksums_empty_array_files() {
    let api = mock_api();
    api.transport().queue_body(r#"{"files": []}"#);

    let checksums = api.get_plugin_checksums("hello-dolly", "1.7.2").unwrap().unwrap();
    assert!(checksums.is_empty());
}

#[test]
fn test_plugin_checksums_missing_files_is_none() {
    let api = mock_api();
    api.transport().queue_body(r#"{"plugin": "akismet"}"#);
    api.transport().queue_body(r#"{"files": "none"}"#);
    api.transport().queue_body(r#""files""#);

    for _ in 0..3 {
        assert!(api.get_plugin_checksums("akismet", "5.3").unwrap().is_none());
    }
}

#[test]
fn test_plugin_checksums_keep_extra_fields_and_bare_hashes() {
    let api = mock_api();
    api.transport().queue_body(
        r#"{"files": {"a.php": {"md5": "x", "sha256": "y", "size": 123}, "b.php": "deadbeef"}}"#,
    );

    let checksums = api.get_plugin_checksums("akismet", "5.3").unwrap().unwrap();

    let a = checksums.get("a.php").unwrap();
    assert_eq!(a.get("size"), Some(&json!(123)));
    assert_eq!(a.md5(), ["x"]);
    let b = checksums.get("b.php").unwrap();
    assert_eq!(b.hashes(), ["deadbeef"]);
    assert!(b.matches("deadbeef"));

    assert_eq!(
        serde_json::to_value(&checksums).unwrap(),
        json!({"a.php": {"md5": "x", "sha256": "y", "size": 123}, "b.php": "deadbeef"})
    );
}
