use super::*;

use std::collections::HashSet;

// =============================================================
// Page table
// =============================================================

#[test]
fn every_declared_path_resolves_to_its_own_page() {
    for page in Page::ALL {
        assert_eq!(resolve_route(page.path()), RouteMatch::Page(page));
    }
}

#[test]
fn declared_paths_are_distinct() {
    let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
    assert_eq!(paths.len(), Page::ALL.len());
}

#[test]
fn segment_is_path_without_leading_slash() {
    for page in Page::ALL {
        assert_eq!(format!("/{}", page.segment()), page.path());
    }
}

#[test]
fn seven_literal_routes_are_declared() {
    let paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
    assert_eq!(
        paths,
        vec!["/", "/arquitetura", "/agentes", "/pipeline", "/integracoes", "/deployment", "/roadmap"]
    );
}

// =============================================================
// Catch-all
// =============================================================

#[test]
fn undeclared_path_falls_through_to_not_found() {
    assert_eq!(
        resolve_route("/does-not-exist"),
        RouteMatch::NotFound { path: "/does-not-exist".to_owned() }
    );
}

#[test]
fn matching_is_exact_not_prefix() {
    assert!(Page::from_path("/arquitetura/sub").is_none());
    assert!(Page::from_path("/arquitetura-detalhada").is_none());
    assert!(Page::from_path("/pipeline/").is_none());
    assert!(Page::from_path("").is_none());
}

#[test]
fn pipeline_scenario_resolves_to_pipeline_page() {
    assert_eq!(resolve_route("/pipeline"), RouteMatch::Page(Page::Pipeline));
    assert_eq!(Page::Pipeline.title(), "Pipeline de Dados");
}

// =============================================================
// Titles and markers
// =============================================================

#[test]
fn page_markers_are_distinct_and_never_the_fallback_marker() {
    let keys: HashSet<_> = Page::ALL.iter().map(|p| p.key()).collect();
    assert_eq!(keys.len(), Page::ALL.len());
    assert!(!keys.contains(NOT_FOUND_KEY));
}

#[test]
fn route_match_title_and_key_follow_the_resolved_page() {
    let hit = resolve_route("/agentes");
    assert_eq!(hit.title(), "Agentes de IA");
    assert_eq!(hit.key(), "agents");

    let miss = resolve_route("/nada");
    assert_eq!(miss.title(), NOT_FOUND_TITLE);
    assert_eq!(miss.key(), NOT_FOUND_KEY);
}
