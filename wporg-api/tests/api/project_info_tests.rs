// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for plugin and theme directory lookups

use super::{mock_api, only_url};

#[test]
fn test_plugin_info() {
    let api = mock_api();
    api.transport().queue_body(
        r#"{
            "name": "Akismet Anti-spam: Spam Protection",
            "slug": "akismet",
            "version": "5.3",
            "download_link": "https://downloads.wordpress.org/plugin/akismet.5.3.zip"
        }"#,
    );

    let info = api.get_plugin_info("akismet", "en_US").unwrap().unwrap();

    assert_eq!(info.slug(), Some("akismet"));
    assert_eq!(info.version(), Some("5.3"));
    assert!(info.download_link().unwrap().ends_with("akismet.5.3.zip"));
    assert_eq!(
        only_url(&api),
        "https://api.wordpress.org/plugins/info/1.2/?action=plugin_information\
         &request%5Bslug%5D=akismet&request%5Blocale%5D=en_US"
    );
}

#[test]
fn test_theme_info() {
    let api = mock_api();
    api.transport()
        .queue_body(r#"{"name": "Twenty Twenty-Four", "slug": "twentytwentyfour", "version": "1.0"}"#);

    let info = api.get_theme_info("twentytwentyfour", "en_US").unwrap().unwrap();

    assert_eq!(info.name(), Some("Twenty Twenty-Four"));
    assert!(only_url(&api).starts_with("https://api.wordpress.org/themes/info/1.2/?action=theme_information"));
}

#[test]
fn test_info_error_object_is_none() {
    let api = mock_api();
    api.transport().queue_body(r#"{"error": "Plugin not found."}"#);
    api.transport().queue_body("null");

    assert!(api.get_plugin_info("no-such-plugin", "en_US").unwrap().is_none());
    assert!(api.get_theme_info("no-such-theme", "en_US").unwrap().is_none());
}
