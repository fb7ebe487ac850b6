mod helpers;

use helpers::suffix_table;
use pdns_backend_domain::parsed_host::{parse_port, split_labels, suffix_candidates};
use pdns_backend_domain::ParsedHost;

#[test]
fn test_parse_splits_host_domain_and_tld() {
    let parsed = suffix_table().parse("www.example.com");

    assert_eq!(parsed.tld.as_deref(), Some("com"));
    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert_eq!(parsed.host.as_deref(), Some("www"));
    assert_eq!(parsed.port, 0);
}

#[test]
fn test_parse_reads_trailing_port() {
    let parsed = suffix_table().parse("example.com:53");

    assert_eq!(parsed.port, 53);
    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert!(parsed.host.is_none());
    assert!(parsed.is_apex());
}

#[test]
fn test_parse_single_label_degrades_to_host_only() {
    let parsed = suffix_table().parse("localhost");

    assert_eq!(parsed.domain, None);
    assert_eq!(parsed.tld, None);
    assert_eq!(parsed.host.as_deref(), Some("localhost"));
    assert!(!parsed.is_resolved());
}

#[test]
fn test_parse_empty_input_degrades_to_host_only() {
    let parsed = suffix_table().parse("");

    assert_eq!(parsed, ParsedHost::unresolved(""));
    assert_eq!(parsed.host.as_deref(), Some(""));
}

#[test]
fn test_parse_unknown_suffix_degrades_to_host_only() {
    let parsed = suffix_table().parse("www.example.invalid");

    assert_eq!(parsed.domain, None);
    assert_eq!(parsed.host.as_deref(), Some("www.example.invalid"));
}

#[test]
fn test_parse_stops_at_rightmost_matching_suffix() {
    let parsed = suffix_table().parse("mail.shop.example.co.uk");

    assert_eq!(parsed.tld.as_deref(), Some("uk"));
    assert_eq!(parsed.domain.as_deref(), Some("co.uk"));
    assert_eq!(parsed.host.as_deref(), Some("mail.shop.example"));
}

#[test]
fn test_parse_is_case_insensitive() {
    let parsed = suffix_table().parse("WWW.Example.COM");

    assert_eq!(parsed.tld.as_deref(), Some("com"));
    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert_eq!(parsed.host.as_deref(), Some("www"));
    assert_eq!(parsed.source, "WWW.Example.COM");
}

#[test]
fn test_parse_ignores_trailing_root_dot() {
    let parsed = suffix_table().parse("www.example.com.");

    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert_eq!(parsed.host.as_deref(), Some("www"));
}

#[test]
fn test_two_labels_split_on_rightmost_suffix() {
    let parsed = suffix_table().parse("co.uk");

    assert_eq!(parsed.tld.as_deref(), Some("uk"));
    assert_eq!(parsed.domain.as_deref(), Some("co.uk"));
    assert_eq!(parsed.host, None);
}

#[test]
fn test_parse_port_requires_digits() {
    assert_eq!(parse_port("example.com:8080"), 8080);
    assert_eq!(parse_port("example.com:"), 0);
    assert_eq!(parse_port("example.com:http"), 0);
    assert_eq!(parse_port("example.com"), 0);
}

#[test]
fn test_split_labels_drops_port_and_empty_labels() {
    assert_eq!(
        split_labels("a..example.com.:53"),
        vec!["a".to_string(), "example".to_string(), "com".to_string()]
    );
}

#[test]
fn test_suffix_candidates_widen_leftwards() {
    let labels = split_labels("www.example.co.uk");

    let candidates = suffix_candidates(&labels);

    assert_eq!(
        candidates,
        vec![
            (1, "uk".to_string()),
            (2, "co.uk".to_string()),
            (3, "example.co.uk".to_string()),
        ]
    );
}
