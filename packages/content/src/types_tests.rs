#![cfg(test)]

use crate::types::{filter_services, FaqEntry, ServiceEntry};

fn service(name: &str) -> ServiceEntry {
    ServiceEntry {
        name: name.to_string(),
        description: format!("{name} description"),
    }
}

#[test]
fn service_entry_tolerates_missing_fields() {
    let entry: ServiceEntry = serde_json::from_str(r#"{"name":"Audit"}"#).unwrap();
    assert_eq!(entry.name, "Audit");
    assert_eq!(entry.description, "");
}

#[test]
fn faq_entry_reads_short_keys() {
    let entry: FaqEntry = serde_json::from_str(r#"{"q":"Why?","a":"Because."}"#).unwrap();
    assert_eq!(entry.question, "Why?");
    assert_eq!(entry.answer, "Because.");
}

#[test]
fn filter_is_case_insensitive_on_name_only() {
    let entries = vec![
        service("Cloud Migration"),
        service("Data Analytics"),
        ServiceEntry {
            name: "Support".to_string(),
            description: "cloud-first helpdesk".to_string(),
        },
    ];

    let hits = filter_services(&entries, "CLOUD");
    assert_eq!(hits, vec![&entries[0]]);

    let hits = filter_services(&entries, "a");
    assert_eq!(hits, vec![&entries[0], &entries[1]]);
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let entries = vec![service("B"), service("A"), service("C")];
    let hits = filter_services(&entries, "");
    assert_eq!(hits, entries.iter().collect::<Vec<_>>());
}

#[test]
fn no_match_yields_nothing() {
    let entries = vec![service("Consulting")];
    assert!(filter_services(&entries, "zzz").is_empty());
}
