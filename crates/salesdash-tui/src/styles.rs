//! Light and dark palettes.

use ratatui::style::{Color, Modifier, Style};
use salesdash_core::products::ProductStatus;
use salesdash_core::stats::ColorToken;
use salesdash_core::ThemeMode;

/// Convert `0xRRGGBB` to a terminal colour.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colour palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub highlight: Color,
    pub sales_series: Color,
    pub target_series: Color,
}

impl Palette {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: rgb(0x00F9_FAFB),
            surface: rgb(0x00FF_FFFF),
            text: rgb(0x0011_1827),
            muted: rgb(0x006B_7280),
            border: rgb(0x00E5_E7EB),
            accent: rgb(0x004F_46E5),
            accent_soft: rgb(0x00E0_E7FF),
            success: rgb(0x0016_A34A),
            error: rgb(0x00DC_2626),
            warning: rgb(0x00CA_8A04),
            highlight: rgb(0x00F3_F4F6),
            sales_series: rgb(0x004F_46E5),
            target_series: rgb(0x0093_33EA),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: rgb(0x0011_1827),
            surface: rgb(0x001F_2937),
            text: rgb(0x00FF_FFFF),
            muted: rgb(0x009C_A3AF),
            border: rgb(0x0037_4151),
            accent: rgb(0x0081_8CF8),
            accent_soft: rgb(0x0031_2E81),
            success: rgb(0x004A_DE80),
            error: rgb(0x00F8_7171),
            warning: rgb(0x00FA_CC15),
            highlight: rgb(0x0037_4151),
            sales_series: rgb(0x0063_66F1),
            target_series: rgb(0x00A8_55F7),
        }
    }

    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Page background.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Card background.
    #[must_use]
    pub fn surface_style(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text)
    }

    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Selected button / current navigation entry.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.accent_soft)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Gain/loss colour.
    #[must_use]
    pub fn change_style(&self, positive: bool) -> Style {
        if positive {
            self.success_style()
        } else {
            self.error_style()
        }
    }

    /// Status badge colour.
    #[must_use]
    pub fn status_style(&self, status: ProductStatus) -> Style {
        let color = match status {
            ProductStatus::TrendingUp => self.success,
            ProductStatus::Stable => self.warning,
            ProductStatus::Declining => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Stat card icon colour.
    #[must_use]
    pub fn token_color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Blue => rgb(0x003B_82F6),
            ColorToken::Purple => rgb(0x00A8_55F7),
            ColorToken::Pink => rgb(0x00EC_4899),
            ColorToken::Green => rgb(0x0022_C55E),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
