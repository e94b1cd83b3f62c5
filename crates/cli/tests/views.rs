//! Integration tests for the inbox and quotation list commands against the
//! bundled demo data.

use tourdesk_cli::commands::{inbox_view, quotation_view};
use tourdesk_cli::store::{load_inbox, load_quotations};
use tourdesk_core::view::RawFilterParams;

fn raw(search: &str, filter_type: &str) -> RawFilterParams {
    RawFilterParams {
        search_term: search.to_string(),
        filter_type: filter_type.to_string(),
        ..Default::default()
    }
}

fn ids<'a, R: 'a>(items: &[&'a R], id: impl Fn(&R) -> &str) -> Vec<String> {
    items.iter().map(|r| id(r).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Inbox
// ---------------------------------------------------------------------------

#[test]
fn inbox_search_for_rome_finds_the_honeymoon_request() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &raw("rome", "any"), false);
    assert_eq!(ids(&report.items, |m| m.id.as_str()), vec!["MSG-001"]);
}

#[test]
fn inbox_stats_cover_the_whole_store_while_filtered() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &raw("", "supplier_update"), false);
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.stats.total, 8);
    assert_eq!(report.stats.unread, 4);
}

#[test]
fn inbox_defaults_to_newest_first() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &RawFilterParams::default(), false);
    let got = ids(&report.items, |m| m.id.as_str());
    assert_eq!(got.first().map(String::as_str), Some("MSG-001"));
    assert_eq!(got.last().map(String::as_str), Some("MSG-008"));
}

#[test]
fn inbox_triage_puts_urgent_action_first() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &RawFilterParams::default(), true);
    assert_eq!(report.items[0].id, "MSG-003");
    assert_eq!(report.items.len(), store.len());
}

#[test]
fn inbox_triage_still_applies_filters() {
    let store = load_inbox(None).unwrap();
    let mut params = raw("", "all");
    params.priority_filter = Some("high".to_string());
    let report = inbox_view(&store, &params, true);
    assert_eq!(ids(&report.items, |m| m.id.as_str()), vec!["MSG-001", "MSG-005"]);
}

#[test]
fn inbox_unknown_type_is_reported_and_ignored() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &raw("", "newsletter"), false);
    assert_eq!(report.items.len(), store.len());
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].value, "newsletter");
}

#[test]
fn inbox_report_serializes_to_json() {
    let store = load_inbox(None).unwrap();
    let report = inbox_view(&store, &raw("kyoto", "all"), false);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["items"][0]["id"], "MSG-003");
    assert_eq!(json["items"][0]["priority"], "urgent");
    assert_eq!(json["stats"]["total"], 8);
    assert!(json["anomalies"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Quotations
// ---------------------------------------------------------------------------

#[test]
fn quotes_by_value_descending_keep_ties_in_store_order() {
    let store = load_quotations(None).unwrap();
    let mut params = raw("", "all");
    params.sort_by = Some("value".to_string());
    params.sort_order = Some("desc".to_string());
    let report = quotation_view(&store, &params);
    assert_eq!(
        ids(&report.items, |q| q.id.as_str()),
        vec![
            "Q-2024-011",
            "Q-2024-014",
            "Q-2024-003",
            "Q-2024-001",
            "Q-2024-009",
            "Q-2024-006",
        ]
    );
}

#[test]
fn quotes_search_matches_destinations() {
    let store = load_quotations(None).unwrap();
    let report = quotation_view(&store, &raw("porto", "all"));
    assert_eq!(ids(&report.items, |q| q.id.as_str()), vec!["Q-2024-009"]);
}

#[test]
fn quotes_status_filter_and_stats() {
    let store = load_quotations(None).unwrap();
    let report = quotation_view(&store, &raw("", "approved"));
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.stats.total, 6);
    assert_eq!(report.stats.confirmed, 2);
    assert_eq!(report.stats.pending, 1);
    assert_eq!(report.stats.draft, 1);
}

#[test]
fn quotes_name_sort_ascending() {
    let store = load_quotations(None).unwrap();
    let mut params = raw("", "all");
    params.sort_by = Some("name".to_string());
    params.sort_order = Some("ascending".to_string());
    let report = quotation_view(&store, &params);
    let names: Vec<&str> = report.items.iter().map(|q| q.customer.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Anna Berg",
            "David Owens",
            "Emma Clarke",
            "Lena Hoffmann",
            "Marco Bianchi",
            "Sarah Nakamura",
        ]
    );
}
