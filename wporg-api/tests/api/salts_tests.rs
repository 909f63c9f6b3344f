// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for salt generation

use super::{mock_api, only_url};
use wporg_api::{parse_salts, Response};

const SALTS: &str = "define('AUTH_KEY',         'W!x9:k|Z');\n\
                     define('SECURE_AUTH_KEY',  'q<2>Lm@');\n";

#[test]
fn test_salts_returns_trimmed_body() {
    let api = mock_api();
    api.transport().queue_body(format!("\n\n{SALTS}\n  "));

    let salts = api.get_salts().unwrap().unwrap();

    assert_eq!(salts, SALTS.trim());
    assert_eq!(only_url(&api), "https://api.wordpress.org/secret-key/1.1/salt/");
}

#[test]
fn test_salts_does_not_send_json_accept() {
    let api = mock_api();
    api.transport().queue_body(SALTS);

    api.get_salts().unwrap();

    let sent = api.transport().last_request().unwrap();
    assert!(sent.header("Accept").is_none());
}

#[test]
fn test_salts_are_not_decoded_as_json() {
    let api = mock_api();
    api.transport().queue_body("  {\"looks\": \"like json\"} ");
    api.transport().queue_body("{broken json");

    assert_eq!(
        api.get_salts().unwrap().as_deref(),
        Some("{\"looks\": \"like json\"}")
    );
    assert_eq!(api.get_salts().unwrap().as_deref(), Some("{broken json"));
}

#[test]
fn test_salts_empty_body_is_none() {
    let api = mock_api();
    api.transport().queue_response(Response::ok(" \n\t "));

    assert!(api.get_salts().unwrap().is_none());
}

#[test]
fn test_salts_block_parses() {
    let api = mock_api();
    api.transport().queue_body(SALTS);

    let block = api.get_salts().unwrap().unwrap();
    let parsed = parse_salts(&block);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].name, "AUTH_KEY");
    assert_eq!(parsed[0].value, "W!x9:k|Z");
    assert_eq!(parsed[1].name, "SECURE_AUTH_KEY");
}
