//! Navigation tree and accordion state.

use crate::icon::Icon;

/// Entry nested under a navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChild {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// Top-level navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub name: &'static str,
    pub icon: Icon,
    /// Static "you are here" marker. Unrelated to expansion.
    pub current: bool,
    pub children: &'static [NavChild],
}

impl NavSection {
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Action listed in the profile menu. Actions have no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAction {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// Single-select accordion over the navigation sections, plus a keyboard
/// cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    expanded: Option<&'static str>,
    cursor: usize,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the expanded section, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded == Some(name)
    }

    /// Toggle a section: collapse it if it is open, otherwise open it and
    /// close whichever section was open.
    pub fn toggle(&mut self, name: &'static str) {
        self.expanded = if self.expanded == Some(name) {
            None
        } else {
            Some(name)
        };
        tracing::debug!(expanded = ?self.expanded, "navigation toggled");
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, section_count: usize) {
        if self.cursor + 1 < section_count {
            self.cursor += 1;
        }
    }

    /// Move the cursor to a section and toggle it.
    pub fn select(&mut self, sections: &[NavSection], index: usize) {
        if let Some(section) = sections.get(index) {
            self.cursor = index;
            self.toggle(section.name);
        }
    }

    /// Toggle the section under the cursor.
    pub fn toggle_at_cursor(&mut self, sections: &[NavSection]) {
        self.select(sections, self.cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NAVIGATION;

    #[test]
    fn starts_collapsed() {
        let nav = NavState::new();
        assert_eq!(nav.expanded(), None);
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn toggle_same_section_collapses() {
        let mut nav = NavState::new();
        nav.toggle("Sales");
        assert!(nav.is_expanded("Sales"));
        nav.toggle("Sales");
        assert_eq!(nav.expanded(), None);
    }

    #[test]
    fn toggle_other_section_switches() {
        let mut nav = NavState::new();
        nav.toggle("Sales");
        nav.toggle("Customers");
        assert!(nav.is_expanded("Customers"));
        assert!(!nav.is_expanded("Sales"));
    }

    #[test]
    fn cursor_is_bounded() {
        let mut nav = NavState::new();
        nav.cursor_up();
        assert_eq!(nav.cursor(), 0);
        for _ in 0..10 {
            nav.cursor_down(NAVIGATION.len());
        }
        assert_eq!(nav.cursor(), NAVIGATION.len() - 1);
    }

    #[test]
    fn toggle_at_cursor_uses_cursor_section() {
        let mut nav = NavState::new();
        nav.cursor_down(NAVIGATION.len());
        nav.toggle_at_cursor(&NAVIGATION);
        assert!(nav.is_expanded("Sales"));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut nav = NavState::new();
        nav.select(&NAVIGATION, 42);
        assert_eq!(nav.expanded(), None);
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn exactly_one_section_is_current() {
        assert_eq!(NAVIGATION.iter().filter(|s| s.current).count(), 1);
        assert!(!NAVIGATION[0].is_expandable());
        assert!(NAVIGATION[1].is_expandable());
    }
}
