/// Icons the personality page knows how to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconKind {
    Brain,
    Heart,
    Users,
    Target,
    Briefcase,
    Chart,
    Compass,
    Shield,
    #[default]
    Sparkles,
}

impl IconKind {
    /// Resolve a fixture icon key. Unknown keys render as `Sparkles`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "brain" => Self::Brain,
            "heart" => Self::Heart,
            "users" | "people" => Self::Users,
            "target" => Self::Target,
            "briefcase" | "career" => Self::Briefcase,
            "chart" | "bar-chart" => Self::Chart,
            "compass" => Self::Compass,
            "shield" => Self::Shield,
            _ => Self::Sparkles,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "🧠",
            Self::Heart => "❤",
            Self::Users => "👥",
            Self::Target => "🎯",
            Self::Briefcase => "💼",
            Self::Chart => "📊",
            Self::Compass => "🧭",
            Self::Shield => "🛡",
            Self::Sparkles => "✨",
        }
    }
}
