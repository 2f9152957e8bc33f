//! Symbolic icon references used by navigation entries and page fixtures.
//!
//! Icons render as a single glyph inside a `span.icon` whose modifier class
//! (`icon--<name>`) lets the stylesheet swap in artwork later.

/// A named icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertCircle,
    ArrowLeft,
    ArrowRight,
    BookText,
    Bot,
    Brain,
    Building,
    Calendar,
    CheckCircle,
    ChevronRight,
    Clock,
    Code,
    Cpu,
    Database,
    FileText,
    GitBranch,
    Github,
    Globe,
    Home,
    Lightbulb,
    MapPin,
    Menu,
    MessageSquare,
    Monitor,
    Puzzle,
    Rocket,
    Server,
    Settings,
    Shield,
    Target,
    Webhook,
    Workflow,
    Zap,
}

impl Icon {
    /// Kebab-case name used in the `icon--<name>` class.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::AlertCircle => "alert-circle",
            Icon::ArrowLeft => "arrow-left",
            Icon::ArrowRight => "arrow-right",
            Icon::BookText => "book-text",
            Icon::Bot => "bot",
            Icon::Brain => "brain",
            Icon::Building => "building",
            Icon::Calendar => "calendar",
            Icon::CheckCircle => "check-circle",
            Icon::ChevronRight => "chevron-right",
            Icon::Clock => "clock",
            Icon::Code => "code",
            Icon::Cpu => "cpu",
            Icon::Database => "database",
            Icon::FileText => "file-text",
            Icon::GitBranch => "git-branch",
            Icon::Github => "github",
            Icon::Globe => "globe",
            Icon::Home => "home",
            Icon::Lightbulb => "lightbulb",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::MessageSquare => "message-square",
            Icon::Monitor => "monitor",
            Icon::Puzzle => "puzzle",
            Icon::Rocket => "rocket",
            Icon::Server => "server",
            Icon::Settings => "settings",
            Icon::Shield => "shield",
            Icon::Target => "target",
            Icon::Webhook => "webhook",
            Icon::Workflow => "workflow",
            Icon::Zap => "zap",
        }
    }

    /// Text glyph rendered inside the icon span.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AlertCircle => "⚠",
            Icon::ArrowLeft => "←",
            Icon::ArrowRight => "→",
            Icon::BookText => "📖",
            Icon::Bot => "🤖",
            Icon::Brain => "🧠",
            Icon::Building => "🏢",
            Icon::Calendar => "📅",
            Icon::CheckCircle => "✔",
            Icon::ChevronRight => "›",
            Icon::Clock => "◷",
            Icon::Code => "</>",
            Icon::Cpu => "⚙",
            Icon::Database => "🗄",
            Icon::FileText => "📄",
            Icon::GitBranch => "⑂",
            Icon::Github => "🐙",
            Icon::Globe => "🌐",
            Icon::Home => "⌂",
            Icon::Lightbulb => "💡",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::MessageSquare => "💬",
            Icon::Monitor => "🖥",
            Icon::Puzzle => "🧩",
            Icon::Rocket => "🚀",
            Icon::Server => "🖧",
            Icon::Settings => "⚙",
            Icon::Shield => "🛡",
            Icon::Target => "🎯",
            Icon::Webhook => "🔗",
            Icon::Workflow => "⇄",
            Icon::Zap => "⚡",
        }
    }
}
