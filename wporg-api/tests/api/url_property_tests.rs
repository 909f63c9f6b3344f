// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for request URL construction

use proptest::prelude::*;

use super::mock_api;

proptest! {
    #[test]
    fn prop_plugin_checksums_url_is_verbatim(
        plugin in "[a-z0-9][a-z0-9-]{0,30}",
        version in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}",
    ) {
        let api = mock_api();
        api.transport().queue_body(r#"{"files": {}}"#);

        api.get_plugin_checksums(&plugin, &version).unwrap();

        let sent = api.transport().last_request().unwrap();
        prop_assert_eq!(
            sent.url,
            format!("https://downloads.wordpress.org/plugin-checksums/{plugin}/{version}.json")
        );
    }

    #[test]
    fn prop_core_checksums_url_carries_version_and_locale(
        version in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}",
        locale in "[a-z]{2}_[A-Z]{2}",
    ) {
        let api = mock_api();
        api.transport().queue_body(r#"{"checksums": {}}"#);

        let checksums = api.get_core_checksums(&version, &locale).unwrap();
        prop_assert!(checksums.map(|c| c.is_empty()).unwrap_or(false));

        let sent = api.transport().last_request().unwrap();
        prop_assert_eq!(
            sent.url,
            format!("https://api.wordpress.org/core/checksums/1.0/?version={version}&locale={locale}")
        );
    }
}
