//! Icon references used by navigation entries, stat cards and menus.

/// A named icon. Views turn it into a terminal glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ChartBar,
    CurrencyDollar,
    UserGroup,
    Cog,
    ShoppingCart,
    DocumentChartBar,
    User,
    BuildingOffice,
    Phone,
    ChatBubble,
    UserCircle,
    Key,
    PaintBrush,
    BellAlert,
    GlobeAlt,
    Users,
    CreditCard,
    Bell,
    SignOut,
}

impl Icon {
    /// Single-column glyph for this icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ChartBar => "▥",
            Self::CurrencyDollar => "$",
            Self::UserGroup | Self::Users => "☺",
            Self::Cog => "⚙",
            Self::ShoppingCart => "⊞",
            Self::DocumentChartBar => "≣",
            Self::User | Self::UserCircle => "●",
            Self::BuildingOffice => "⌂",
            Self::Phone => "☎",
            Self::ChatBubble => "✉",
            Self::Key => "⚷",
            Self::PaintBrush => "✎",
            Self::BellAlert | Self::Bell => "♪",
            Self::GlobeAlt => "◍",
            Self::CreditCard => "▭",
            Self::SignOut => "⇥",
        }
    }
}
