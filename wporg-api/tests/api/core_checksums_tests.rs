// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for core checksums

use super::{mock_api, only_url};
use wporg_api::DEFAULT_LOCALE;

#[test]
fn test_core_checksums_returns_map() {
    let api = mock_api();
    api.transport().queue_body(
        r#"{"checksums": {"wp-login.php": "abc123", "wp-includes/version.php": "def456"}}"#,
    );

    let checksums = api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().unwrap();

    assert_eq!(checksums.len(), 2);
    assert_eq!(checksums["wp-login.php"], "abc123");
    assert_eq!(checksums["wp-includes/version.php"], "def456");
}

#[test]
fn test_core_checksums_url_and_accept_header() {
    let api = mock_api();
    api.transport().queue_body(r#"{"checksums": {}}"#);

    api.get_core_checksums("6.4.3", "de_DE").unwrap();

    assert_eq!(
        only_url(&api),
        "https://api.wordpress.org/core/checksums/1.0/?version=6.4.3&locale=de_DE"
    );
    let sent = api.transport().last_request().unwrap();
    assert_eq!(sent.header("Accept"), Some("application/json"));
    assert_eq!(sent.options.halt_on_error, Some(false));
}

#[test]
fn test_core_checksums_missing_field_is_none() {
    let api = mock_api();
    api.transport().queue_body(r#"{"other": {}}"#);

    assert!(api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().is_none());
}

#[test]
fn test_core_checksums_non_object_field_is_none() {
    let api = mock_api();
    api.transport().queue_body(r#"{"checksums": false}"#);
    api.transport().queue_body(r#"{"checksums": ["abc"]}"#);

    assert!(api.get_core_checksums("0.0.1", DEFAULT_LOCALE).unwrap().is_none());
    assert!(api.get_core_checksums("0.0.1", DEFAULT_LOCALE).unwrap().is_none());
}

#[test]
fn test_core_checksums_non_object_body_is_none() {
    let api = mock_api();
    api.transport().queue_body(r#"["checksums"]"#);
    api.transport().queue_body("42");

    assert!(api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().is_none());
    assert!(api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().is_none());
}

#[test]
fn test_core_checksums_skips_non_string_values() {
    let api = mock_api();
    api.transport()
        .queue_body(r#"{"checksums": {"index.php": "abc", "wp-x.php": null}}"#);

    let checksums = api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().unwrap();

    assert_eq!(checksums.len(), 1);
    assert_eq!(checksums["index.php"], "abc");
    assert!(!checksums.contains_key("wp-x.php"));
}

#[test]
fn test_core_checksums_nested_versions_yield_empty_map() {
    let api = mock_api();
    api.transport()
        .queue_body(r#"{"checksums": {"6.4.3": {"wp-login.php": "abc"}}}"#);

    let checksums = api.get_core_checksums("6.4.3", DEFAULT_LOCALE).unwrap().unwrap();
    assert!(checksums.is_empty());
}
