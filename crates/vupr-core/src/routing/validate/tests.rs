use super::*;
use crate::routing::RoutingRule;

fn rule(name: &str, urls: &[&str]) -> RoutingRule {
    RoutingRule::new(
        name,
        format!("{name} folder"),
        urls.iter().map(|u| u.to_string()).collect(),
    )
}

#[test]
fn distinct_urls_pass() {
    let table = RoutingTable::new(
        "Default",
        vec!["https://mail.example.com".to_string()],
        vec![
            rule("Work", &["https://mail.example.com", "https://docs.example.com"]),
            rule("Private", &["https://social.example.org"]),
        ],
    );
    assert!(validate(&table).is_ok());
}

#[test]
fn empty_table_passes() {
    let table = RoutingTable::new("Default", Vec::new(), Vec::new());
    assert!(validate(&table).is_ok());
}

#[test]
fn duplicate_across_rules_names_every_owner() {
    let table = RoutingTable::new(
        "Default",
        Vec::new(),
        vec![
            rule("Work", &["https://dup.example.com"]),
            rule("Private", &["https://other.example.com", "https://dup.example.com"]),
            rule("Shopping", &["https://dup.example.com"]),
        ],
    );
    let err = validate(&table).unwrap_err();
    assert_eq!(
        err.duplicates,
        vec![DuplicateUrl {
            url: "https://dup.example.com".to_string(),
            profiles: vec!["Work".into(), "Private".into(), "Shopping".into()],
        }]
    );
}

#[test]
fn duplicate_within_one_rule() {
    let table = RoutingTable::new(
        "Default",
        Vec::new(),
        vec![rule("Work", &["https://a.example.com", "https://a.example.com"])],
    );
    let err = validate(&table).unwrap_err();
    assert_eq!(err.duplicates.len(), 1);
    assert_eq!(err.duplicates[0].profiles, ["Work", "Work"]);
}

#[test]
fn several_duplicates_in_first_appearance_order() {
    let table = RoutingTable::new(
        "Default",
        Vec::new(),
        vec![
            rule("A", &["https://one.example.com", "https://two.example.com"]),
            rule("B", &["https://two.example.com", "https://one.example.com"]),
        ],
    );
    let err = validate(&table).unwrap_err();
    let urls: Vec<&str> = err.duplicates.iter().map(|d| d.url.as_str()).collect();
    assert_eq!(urls, ["https://two.example.com", "https://one.example.com"]);
}

#[test]
fn message_lists_urls_and_profiles() {
    let table = RoutingTable::new(
        "Default",
        Vec::new(),
        vec![
            rule("Work", &["https://dup.example.com"]),
            rule("Private", &["https://dup.example.com"]),
        ],
    );
    let msg = validate(&table).unwrap_err().to_string();
    assert!(msg.starts_with("duplicate URLs found:"));
    assert!(msg.contains("- https://dup.example.com appears in:"));
    assert!(msg.contains("profile: \"Work\""));
    assert!(msg.contains("profile: \"Private\""));
}

#[test]
fn same_host_different_spelling_is_not_a_duplicate() {
    let table = RoutingTable::new(
        "Default",
        Vec::new(),
        vec![
            rule("Work", &["https://dup.example.com"]),
            rule("Private", &["https://DUP.example.com/"]),
        ],
    );
    assert!(validate(&table).is_ok());
}
