//! Route table mapping request paths to documentation pages.
//!
//! DESIGN
//! ======
//! Matching is exact string equality with a single catch-all. The Leptos
//! `<Routes>` tree in `app.rs` is declared from [`Page::segment`], so this
//! table and the rendered router never disagree on spelling.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// A routable documentation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    Architecture,
    Agents,
    Pipeline,
    Integrations,
    Deployment,
    Roadmap,
}

impl Page {
    /// Every declared page, in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::Architecture,
        Page::Agents,
        Page::Pipeline,
        Page::Integrations,
        Page::Deployment,
        Page::Roadmap,
    ];

    /// Router segment without the leading slash (`""` for the root).
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Overview => "",
            Page::Architecture => "arquitetura",
            Page::Agents => "agentes",
            Page::Pipeline => "pipeline",
            Page::Integrations => "integracoes",
            Page::Deployment => "deployment",
            Page::Roadmap => "roadmap",
        }
    }

    /// Absolute URL path for this page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::Overview => "/",
            Page::Architecture => "/arquitetura",
            Page::Agents => "/agentes",
            Page::Pipeline => "/pipeline",
            Page::Integrations => "/integracoes",
            Page::Deployment => "/deployment",
            Page::Roadmap => "/roadmap",
        }
    }

    /// Label used in breadcrumbs and the document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Architecture => "Arquitetura",
            Page::Agents => "Agentes de IA",
            Page::Pipeline => "Pipeline de Dados",
            Page::Integrations => "Integrações",
            Page::Deployment => "Deployment",
            Page::Roadmap => "Roadmap",
        }
    }

    /// Marker rendered as `data-page` on the page root.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Architecture => "architecture",
            Page::Agents => "agents",
            Page::Pipeline => "pipeline",
            Page::Integrations => "integrations",
            Page::Deployment => "deployment",
            Page::Roadmap => "roadmap",
        }
    }

    /// Exact-match lookup. Trailing slashes, query strings and sub-paths do
    /// not match.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// `data-page` marker of the fallback page.
pub const NOT_FOUND_KEY: &str = "not-found";

/// Document title label of the fallback page.
pub const NOT_FOUND_TITLE: &str = "Página não encontrada";

/// Outcome of resolving a path against the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Page),
    /// Catch-all: the path matched no declared page.
    NotFound { path: String },
}

/// Resolve `path` to a page or the catch-all.
#[must_use]
pub fn resolve_route(path: &str) -> RouteMatch {
    match Page::from_path(path) {
        Some(page) => RouteMatch::Page(page),
        None => RouteMatch::NotFound { path: path.to_owned() },
    }
}

impl RouteMatch {
    /// Label for the document title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            RouteMatch::Page(page) => page.title(),
            RouteMatch::NotFound { .. } => NOT_FOUND_TITLE,
        }
    }

    /// `data-page` marker of the page this match renders.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            RouteMatch::Page(page) => page.key(),
            RouteMatch::NotFound { .. } => NOT_FOUND_KEY,
        }
    }
}
