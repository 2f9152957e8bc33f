use super::*;

use crate::state::route::Page;

fn entry(url: &'static str) -> NavigationEntry {
    NavigationEntry { title: url, url, icon: Icon::Home, description: "" }
}

// =============================================================
// is_active
// =============================================================

#[test]
fn root_entry_is_active_only_on_exact_root() {
    assert!(is_active("/", "/"));
    for route in ["/arquitetura", "/pipeline", "/does-not-exist", "", "//"] {
        assert!(!is_active("/", route), "root should not match {route}");
    }
}

#[test]
fn non_root_entry_matches_by_literal_prefix() {
    assert!(is_active("/arquitetura", "/arquitetura"));
    assert!(is_active("/arquitetura", "/arquitetura/sub"));
    assert!(!is_active("/arquitetura", "/"));
    assert!(!is_active("/arquitetura", "/agentes"));
}

#[test]
fn prefix_rule_also_matches_longer_sibling_segment() {
    assert!(is_active("/arquitetura", "/arquitetura-detalhada"));
}

#[test]
fn empty_route_matches_nothing() {
    assert!(NAVIGATION.iter().all(|e| !is_active(e.url, "")));
}

// =============================================================
// active_flags / active_entry
// =============================================================

#[test]
fn pipeline_route_activates_only_pipeline_entry() {
    let flags = active_flags(NAVIGATION, "/pipeline");
    assert_eq!(flags, vec![false, false, false, true, false, false, false]);
    let active = active_entry(NAVIGATION, "/pipeline").unwrap();
    assert_eq!(active.title, "Pipeline de Dados");
    assert_eq!(active.url, "/pipeline");
}

#[test]
fn root_route_activates_overview_only() {
    let flags = active_flags(NAVIGATION, "/");
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    assert!(flags[0]);
}

#[test]
fn unknown_route_has_no_active_entry() {
    assert!(active_flags(NAVIGATION, "/does-not-exist").iter().all(|f| !f));
    assert!(active_entry(NAVIGATION, "/does-not-exist").is_none());
}

#[test]
fn first_declared_entry_wins_on_overlap() {
    let entries = [entry("/docs"), entry("/docs/api")];
    assert_eq!(active_flags(&entries, "/docs/api/v1"), vec![true, false]);
    assert_eq!(active_index(&entries, "/docs/api"), Some(0));
}

#[test]
fn flags_have_one_slot_per_entry() {
    assert_eq!(active_flags(NAVIGATION, "/roadmap").len(), NAVIGATION.len());
    assert!(active_flags(&[], "/").is_empty());
}

// =============================================================
// Table consistency
// =============================================================

#[test]
fn navigation_mirrors_route_table_order() {
    let urls: Vec<_> = NAVIGATION.iter().map(|e| e.url).collect();
    let paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
    assert_eq!(urls, paths);
}

#[test]
fn each_declared_page_activates_its_own_entry() {
    for (i, page) in Page::ALL.iter().enumerate() {
        assert_eq!(active_index(NAVIGATION, page.path()), Some(i));
    }
}
