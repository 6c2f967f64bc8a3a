//! Profile drop-down menu under the avatar.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use salesdash_core::constants::USER_EMAIL;
use salesdash_core::UserAction;

use crate::styles::Palette;

const MENU_WIDTH: u16 = 36;

/// Open/closed state and the highlighted entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileMenuState {
    open: bool,
    active: usize,
}

impl ProfileMenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.active = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn up(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if self.active + 1 < len {
            self.active += 1;
        }
    }
}

/// Where the menu is drawn: right-aligned just below the top bar.
#[must_use]
pub fn menu_area(frame: Rect, top_bar: Rect, entries: usize) -> Rect {
    let entries = u16::try_from(entries).unwrap_or(u16::MAX);
    let height = entries.saturating_mul(2).saturating_add(4);
    let width = MENU_WIDTH.min(frame.width);
    let y = top_bar.y + top_bar.height;
    Rect {
        x: frame.x + frame.width - width,
        y,
        width,
        height: height.min(frame.height.saturating_sub(y)),
    }
}

/// Render the menu over whatever is underneath.
pub fn render_profile_menu(
    frame: &mut Frame,
    area: Rect,
    actions: &[UserAction],
    state: &ProfileMenuState,
    palette: &Palette,
) {
    let mut lines = vec![
        Line::from(Span::styled(" Signed in as", palette.muted_style())),
        Line::from(Span::styled(
            format!(" {USER_EMAIL}"),
            palette.text_style().add_modifier(Modifier::BOLD),
        )),
    ];
    for (i, action) in actions.iter().enumerate() {
        let style = if i == state.active() {
            palette.selected_style()
        } else {
            palette.text_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", action.icon.glyph()), style),
            Span::styled(action.name, style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", action.description),
            palette.muted_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.surface_style());
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use salesdash_core::data::USER_ACTIONS;

    #[test]
    fn toggle_resets_highlight() {
        let mut menu = ProfileMenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.down(4);
        menu.down(4);
        assert_eq!(menu.active(), 2);
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        assert_eq!(menu.active(), 0);
    }

    #[test]
    fn highlight_stays_in_bounds() {
        let mut menu = ProfileMenuState::default();
        menu.up();
        assert_eq!(menu.active(), 0);
        for _ in 0..10 {
            menu.down(4);
        }
        assert_eq!(menu.active(), 3);
    }

    #[test]
    fn area_hangs_below_top_bar_on_the_right() {
        let area = menu_area(Rect::new(0, 0, 120, 40), Rect::new(0, 0, 120, 3), 4);
        assert_eq!(area, Rect::new(84, 3, 36, 12));
    }

    #[test]
    fn area_clamps_to_small_frames() {
        let area = menu_area(Rect::new(0, 0, 20, 8), Rect::new(0, 0, 20, 3), 4);
        assert_eq!(area, Rect::new(0, 3, 20, 5));
    }

    #[test]
    fn render_lists_email_and_actions() {
        let backend = TestBackend::new(36, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::light();
        let mut menu = ProfileMenuState::default();
        menu.toggle();
        let frame = terminal
            .draw(|frame| render_profile_menu(frame, frame.area(), &USER_ACTIONS, &menu, &palette))
            .unwrap();
        let text: String = (0..12)
            .map(|y| {
                (0..36)
                    .map(|x| frame.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("john.doe@example.com"));
        assert!(text.contains("Your Profile"));
        assert!(text.contains("3 unread notifications"));
        assert!(text.contains("Sign out"));
        // first entry is highlighted
        assert_eq!(frame.buffer[(4, 3)].bg, palette.accent_soft);
    }
}
