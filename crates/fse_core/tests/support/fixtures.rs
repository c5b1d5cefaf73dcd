use fse_core::config::SearchConfig;

/// Config with wildcard allow-lists and the given limit.
pub fn config_with_limit(limit: usize) -> SearchConfig {
    config_with_lists(r#"["all"]"#, r#"["all"]"#, limit)
}

/// Config with allow-lists given as JSON arrays, e.g. `r#"["US"]"#`.
pub fn config_with_lists(from: &str, to: &str, limit: usize) -> SearchConfig {
    let raw = format!(
        r#"{{
            "userkey": "TESTKEY",
            "aircrafttype": "Cessna 172 Skyhawk",
            "terminal": "cmd",
            "from": {from},
            "to": {to},
            "searchlimit": {limit}
        }}"#
    );
    SearchConfig::from_json_str(&raw).expect("fixture config is valid")
}
