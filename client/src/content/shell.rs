//! Branding and header links shared by every page.

use crate::icon::Icon;

pub const BRAND_MARK: &str = "CL";
pub const BRAND_NAME: &str = "CralLabs";
pub const BRAND_TAGLINE: &str = "AI + Data + Automação";
pub const NAV_GROUP_LABEL: &str = "Documentação";
pub const RELEASE_LABEL: &str = "Versão Beta";
pub const RELEASE_VERSION: &str = "v1.0.0-beta";

/// External link shown in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const HEADER_LINKS: &[HeaderLink] = &[
    HeaderLink {
        label: "AgnoPricing",
        href: "https://github.com/MurilloLopesCral/AgnoPricing",
        icon: Icon::Github,
    },
    HeaderLink {
        label: "CompetitionForm",
        href: "https://github.com/MurilloLopesCral/CompetitionForm",
        icon: Icon::Github,
    },
    HeaderLink { label: "Pricing Chatbot", href: "https://agnopricing.onrender.com", icon: Icon::Bot },
    HeaderLink {
        label: "Formulário concorrentes",
        href: "https://competition-form.vercel.app",
        icon: Icon::BookText,
    },
];
