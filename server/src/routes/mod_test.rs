use super::*;

use crallabs_client::state::route::{NOT_FOUND_KEY, Page};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn stub_site() -> Router {
    Router::new()
        .route("/", get(|| async { "inicio" }))
        .route("/pipeline", get(|| async { "pipeline" }))
}

// =============================================================================
// healthz
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn(observe(stub_site(), AppState::new())).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

// =============================================================================
// record_unmatched
// =============================================================================

#[tokio::test]
async fn matched_routes_are_not_recorded() {
    let state = AppState::new();
    let base = spawn(observe(stub_site(), state.clone())).await;

    let resp = reqwest::get(format!("{base}/pipeline")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "pipeline");
    assert!(state.recent_unmatched().is_empty());
}

#[tokio::test]
async fn each_unmatched_request_is_recorded_once() {
    let state = AppState::new();
    let base = spawn(observe(stub_site(), state.clone())).await;

    for path in ["/nao-existe", "/arquitetura/extra"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    }

    let recorded: Vec<String> = state.recent_unmatched().into_iter().map(|r| r.path).collect();
    assert_eq!(recorded, vec!["/nao-existe", "/arquitetura/extra"]);
}

#[tokio::test]
async fn recorded_path_excludes_query_string() {
    let state = AppState::new();
    let base = spawn(observe(stub_site(), state.clone())).await;

    reqwest::get(format!("{base}/sumiu?ref=menu")).await.unwrap();
    assert_eq!(state.recent_unmatched(), vec![UnmatchedRoute::new("/sumiu")]);
}

// =============================================================================
// unmatched_routes
// =============================================================================

#[tokio::test]
async fn diagnostics_endpoint_lists_recorded_paths() {
    let state = AppState::new();
    let base = spawn(observe(stub_site(), state)).await;

    reqwest::get(format!("{base}/missing")).await.unwrap();
    let body: serde_json::Value = reqwest::get(format!("{base}/api/diagnostics/unmatched"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, serde_json::json!([{ "path": "/missing" }]));
}

#[tokio::test]
async fn asset_and_api_misses_are_not_recorded() {
    let state = AppState::new();
    let base = spawn(observe(stub_site(), state.clone())).await;

    for path in ["/pkg/missing.wasm", "/api/nope", "/api"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND, "{path}");
    }
    assert!(state.recent_unmatched().is_empty());
}

#[test]
fn page_path_filter_only_skips_whole_prefixes() {
    assert!(is_page_path("/does-not-exist"));
    assert!(is_page_path("/pkgs"));
    assert!(is_page_path("/apiary"));
    assert!(!is_page_path("/pkg/app.js"));
    assert!(!is_page_path("/api/diagnostics"));
}

// =============================================================================
// site (Leptos SSR)
// =============================================================================

fn leptos_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("crallabs-docs").build()
}

async fn fetch(base: &str, path: &str) -> (reqwest::StatusCode, String) {
    let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn every_declared_path_renders_its_own_page() {
    let state = AppState::new();
    let base = spawn(observe(site(leptos_options()), state.clone())).await;

    for page in Page::ALL {
        let (status, body) = fetch(&base, page.path()).await;
        assert_eq!(status, reqwest::StatusCode::OK, "{}", page.path());
        assert!(body.contains(&format!("data-page=\"{}\"", page.key())), "{} lacks its marker", page.path());
        for other in Page::ALL.iter().filter(|other| **other != page) {
            assert!(!body.contains(&format!("data-page=\"{}\"", other.key())), "{} renders {}", page.path(), other.key());
        }
        assert!(!body.contains(&format!("data-page=\"{NOT_FOUND_KEY}\"")));
        assert_eq!(body.matches("sidebar__item--active").count(), 1, "{}", page.path());
    }
    assert!(state.recent_unmatched().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_path_renders_fallback_once_with_one_record() {
    let state = AppState::new();
    let base = spawn(observe(site(leptos_options()), state.clone())).await;

    let (status, body) = fetch(&base, "/does-not-exist").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body.matches(&format!("data-page=\"{NOT_FOUND_KEY}\"")).count(), 1);
    assert!(body.contains("/does-not-exist"));
    assert!(!body.contains("sidebar__item--active"));

    assert_eq!(state.recent_unmatched(), vec![UnmatchedRoute::new("/does-not-exist")]);
}
