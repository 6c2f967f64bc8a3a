//! Navigation sidebar with the single-select accordion.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use salesdash_core::{NavSection, NavState};

use crate::layout::card_inner;
use crate::styles::Palette;

/// One rendered line of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Section(usize),
    Child { section: usize, child: usize },
    ChildDescription { section: usize, child: usize },
}

/// Lines of the sidebar, top to bottom, for the current expansion.
#[must_use]
pub fn rows(sections: &[NavSection], nav: &NavState) -> Vec<SidebarRow> {
    let mut out = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        out.push(SidebarRow::Section(i));
        if section.is_expandable() && nav.is_expanded(section.name) {
            for child in 0..section.children.len() {
                out.push(SidebarRow::Child { section: i, child });
                out.push(SidebarRow::ChildDescription { section: i, child });
            }
        }
    }
    out
}

/// Section index of the header row under `row` (a terminal row), if any.
#[must_use]
pub fn section_at(area: Rect, sections: &[NavSection], nav: &NavState, row: u16) -> Option<usize> {
    let inner = card_inner(area);
    let offset = row.checked_sub(inner.y)?;
    if offset >= inner.height {
        return None;
    }
    match rows(sections, nav).get(usize::from(offset))? {
        SidebarRow::Section(i) => Some(*i),
        _ => None,
    }
}

fn chevron(section: &NavSection, nav: &NavState) -> &'static str {
    if !section.is_expandable() {
        ""
    } else if nav.is_expanded(section.name) {
        "▾"
    } else {
        "▸"
    }
}

fn row_line<'a>(
    row: SidebarRow,
    sections: &'a [NavSection],
    nav: &NavState,
    palette: &Palette,
    width: u16,
) -> Line<'a> {
    match row {
        SidebarRow::Section(i) => {
            let section = &sections[i];
            let mut style = if section.current {
                palette.selected_style()
            } else {
                palette.text_style()
            };
            if nav.cursor() == i {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let label = format!(" {} {}", section.icon.glyph(), section.name);
            let chevron = chevron(section, nav);
            let used = label.chars().count() + chevron.chars().count() + 1;
            let pad = usize::from(width).saturating_sub(used);
            Line::from(vec![
                Span::styled(label, style),
                Span::styled(" ".repeat(pad), style),
                Span::styled(chevron, style),
                Span::styled(" ", style),
            ])
        }
        SidebarRow::Child { section, child } => {
            let child = &sections[section].children[child];
            Line::from(vec![
                Span::raw("    "),
                Span::styled(child.icon.glyph(), palette.muted_style()),
                Span::raw(" "),
                Span::styled(child.name, palette.text_style()),
            ])
        }
        SidebarRow::ChildDescription { section, child } => {
            let child = &sections[section].children[child];
            Line::from(vec![
                Span::raw("      "),
                Span::styled(child.description, palette.muted_style()),
            ])
        }
    }
}

/// Render the sidebar. `overlay` clears the content underneath first.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    sections: &[NavSection],
    nav: &NavState,
    palette: &Palette,
    overlay: bool,
) {
    if overlay {
        frame.render_widget(Clear, area);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(
            " Sales Dashboard ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(palette.surface_style());
    let inner = block.inner(area);
    let lines: Vec<Line> = rows(sections, nav)
        .into_iter()
        .map(|row| row_line(row, sections, nav, palette, inner.width))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
