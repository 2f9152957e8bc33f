//! Sidebar navigation entries and active-entry resolution.
//!
//! DESIGN
//! ======
//! An entry is active when its url is `/` and the current route is exactly
//! `/`, or when its url is not `/` and the current route starts with it.
//! The prefix rule is literal, so `/arquitetura-detalhada` activates the
//! `/arquitetura` entry. Only the first matching entry in declaration order
//! is highlighted.

use crate::icon::Icon;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One item in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry { title: "Overview", url: "/", icon: Icon::Home, description: "Visão geral" },
    NavigationEntry {
        title: "Arquitetura",
        url: "/arquitetura",
        icon: Icon::Building,
        description: "Estrutura técnica do sistema",
    },
    NavigationEntry {
        title: "Agentes de IA",
        url: "/agentes",
        icon: Icon::Bot,
        description: "Inteligência artificial personalizada",
    },
    NavigationEntry {
        title: "Pipeline de Dados",
        url: "/pipeline",
        icon: Icon::Database,
        description: "Fluxo e processamento de dados",
    },
    NavigationEntry {
        title: "Integrações",
        url: "/integracoes",
        icon: Icon::Puzzle,
        description: "APIs e conectores externos",
    },
    NavigationEntry {
        title: "Deployment",
        url: "/deployment",
        icon: Icon::Rocket,
        description: "Deploy e infraestrutura",
    },
    NavigationEntry { title: "Roadmap", url: "/roadmap", icon: Icon::MapPin, description: "Futuro e planejamento" },
];

/// Whether the entry at `entry_url` matches `current_route`.
#[must_use]
pub fn is_active(entry_url: &str, current_route: &str) -> bool {
    if entry_url == "/" {
        return current_route == "/";
    }
    current_route.starts_with(entry_url)
}

/// Index of the first entry matching `current_route`, if any.
#[must_use]
pub fn active_index(entries: &[NavigationEntry], current_route: &str) -> Option<usize> {
    entries.iter().position(|entry| is_active(entry.url, current_route))
}

/// The highlighted entry for `current_route`.
#[must_use]
pub fn active_entry<'a>(entries: &'a [NavigationEntry], current_route: &str) -> Option<&'a NavigationEntry> {
    active_index(entries, current_route).map(|i| &entries[i])
}

/// One flag per entry; at most one is `true`.
#[must_use]
pub fn active_flags(entries: &[NavigationEntry], current_route: &str) -> Vec<bool> {
    let active = active_index(entries, current_route);
    (0..entries.len()).map(|i| Some(i) == active).collect()
}
