//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Terminal;
use salesdash_core::data::{
    NAVIGATION, PRODUCTS, REVENUE_SEGMENTS, SALES_SERIES, STAT_CARDS, USER_ACTIONS,
};
use salesdash_core::revenue::layout_wedges;
use salesdash_core::{
    NavState, ProductFilter, ProductTableState, RevenueState, SalesTrendState, SortKey,
    ThemePreference, TimeRange,
};

use crate::footer::render_footer;
use crate::header::{render_greeting, render_top_bar};
use crate::keymap::KeyAction;
use crate::layout::{contains, DashboardLayout};
use crate::messages::{PointerEvent, PointerKind, TuiMessage};
use crate::products::{filter_at, header_sort_at, render_products};
use crate::profile_menu::{menu_area, render_profile_menu, ProfileMenuState};
use crate::revenue::{render_revenue, segment_under};
use crate::sales_chart::{range_at, render_sales, sample_under};
use crate::sidebar::{render_sidebar, section_at};
use crate::stat_cards::render_stat_cards;
use crate::styles::Palette;

/// Initial view settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    pub range: TimeRange,
    pub filter: ProductFilter,
    pub sort: SortKey,
    /// Capture the mouse for hover and click.
    pub mouse: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            range: TimeRange::OneYear,
            filter: ProductFilter::All,
            sort: SortKey::Sales,
            mouse: true,
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Persisted dark-mode flag.
    pub theme: ThemePreference,
    /// Palette matching the theme.
    pub palette: Palette,
    /// Sidebar accordion and cursor.
    pub nav: NavState,
    /// Sidebar visibility on narrow terminals.
    pub sidebar_open: bool,
    pub sales: SalesTrendState,
    pub revenue: RevenueState,
    pub products: ProductTableState,
    pub profile_menu: ProfileMenuState,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    mouse: bool,
    today: NaiveDate,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(theme: ThemePreference, options: TuiOptions) -> Self {
        let palette = Palette::for_mode(theme.mode());
        Self {
            should_quit: false,
            theme,
            palette,
            nav: NavState::new(),
            sidebar_open: false,
            sales: SalesTrendState::new(options.range),
            revenue: RevenueState::new(),
            products: ProductTableState::new(options.filter, options.sort),
            profile_menu: ProfileMenuState::default(),
            terminal_width: 120,
            terminal_height: 48,
            mouse: options.mouse,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pin the date shown in the greeting.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Layout for the current terminal size.
    #[must_use]
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout::compute(self.area(), self.sidebar_open)
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    fn sidebar_is_overlay(&self) -> bool {
        self.sidebar_open && !DashboardLayout::is_wide(self.area())
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Pointer(pointer) => {
                self.handle_pointer(pointer);
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::Dismiss => {
                if self.profile_menu.is_open() {
                    self.profile_menu.close();
                } else if self.sidebar_is_overlay() {
                    self.sidebar_open = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyAction::ToggleTheme => {
                let mode = self.theme.toggle();
                self.palette = Palette::for_mode(mode);
                tracing::debug!(?mode, "palette switched");
            }
            KeyAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                tracing::debug!(open = self.sidebar_open, "sidebar toggled");
            }
            KeyAction::Up => {
                if self.profile_menu.is_open() {
                    self.profile_menu.up();
                } else {
                    self.nav.cursor_up();
                }
            }
            KeyAction::Down => {
                if self.profile_menu.is_open() {
                    self.profile_menu.down(USER_ACTIONS.len());
                } else {
                    self.nav.cursor_down(NAVIGATION.len());
                }
            }
            KeyAction::Activate => {
                // menu entries have no action
                if !self.profile_menu.is_open() {
                    self.nav.toggle_at_cursor(&NAVIGATION);
                }
            }
            KeyAction::CycleRange => {
                self.sales.cycle_range();
            }
            KeyAction::HoverPrev => {
                self.sales.step_hover(&SALES_SERIES, -1);
            }
            KeyAction::HoverNext => {
                self.sales.step_hover(&SALES_SERIES, 1);
            }
            KeyAction::ClearHover => {
                self.sales.leave();
            }
            KeyAction::CycleSegment => {
                self.revenue.cycle(REVENUE_SEGMENTS.len());
            }
            KeyAction::CycleFilter => {
                self.products.cycle_filter();
            }
            KeyAction::SortBy(key) => {
                self.products.set_sort(key);
            }
            KeyAction::ToggleProfileMenu => {
                self.profile_menu.toggle();
            }
            KeyAction::None => {}
        }
    }

    /// Handle pointer movement and clicks.
    pub fn handle_pointer(&mut self, pointer: PointerEvent) {
        let layout = self.layout();
        let PointerEvent { kind, column, row } = pointer;
        let on_sidebar_overlay = layout.sidebar_overlay
            && layout
                .sidebar
                .is_some_and(|area| contains(area, column, row));
        let on_menu = self.profile_menu.is_open()
            && contains(
                menu_area(self.area(), layout.top_bar, USER_ACTIONS.len()),
                column,
                row,
            );

        match kind {
            PointerKind::Moved => {
                let covered = on_sidebar_overlay || on_menu;
                let window = self.sales.filtered(&SALES_SERIES);
                match sample_under(layout.sales.chart, window, column, row) {
                    Some(index) if !covered => self.sales.hover_index(&SALES_SERIES, index),
                    _ => self.sales.leave(),
                }
                let wedges = layout_wedges(&REVENUE_SEGMENTS);
                let segment = segment_under(layout.revenue.ring, &wedges, column, row);
                self.revenue.set_active(segment.filter(|_| !covered));
            }
            PointerKind::Down => {
                if on_menu {
                    return;
                }
                self.profile_menu.close();
                self.click(&layout, column, row);
            }
        }
    }

    fn click(&mut self, layout: &DashboardLayout, column: u16, row: u16) {
        if let Some(sidebar) = layout.sidebar {
            if contains(sidebar, column, row) {
                if let Some(index) = section_at(sidebar, &NAVIGATION, &self.nav, row) {
                    self.nav.select(&NAVIGATION, index);
                }
                return;
            }
            if layout.sidebar_overlay {
                // click on the dimmed content closes the overlay
                self.sidebar_open = false;
                return;
            }
        }
        if let Some(range) = range_at(layout.sales.ranges, column, row) {
            self.sales.set_range(range);
        } else if let Some(filter) = filter_at(layout.products.filters, column, row) {
            self.products.set_filter(filter);
        } else if let Some(sort) = header_sort_at(layout.products.table, column, row) {
            self.products.set_sort(sort);
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let layout = DashboardLayout::compute(area, self.sidebar_open);
        let palette = &self.palette;

        frame.render_widget(Block::default().style(palette.base_style()), area);
        render_top_bar(frame, layout.top_bar, palette, self.profile_menu.is_open());
        render_greeting(frame, layout.greeting, palette, self.today);
        render_stat_cards(frame, &layout.stats, &STAT_CARDS, palette);
        render_sales(frame, &layout.sales, &SALES_SERIES, &self.sales, palette);
        render_revenue(frame, &layout.revenue, &REVENUE_SEGMENTS, &self.revenue, palette);
        render_products(frame, &layout.products, &PRODUCTS, &self.products, palette);
        render_footer(frame, layout.footer, palette);

        if let Some(sidebar) = layout.sidebar {
            render_sidebar(
                frame,
                sidebar,
                &NAVIGATION,
                &self.nav,
                palette,
                layout.sidebar_overlay,
            );
        }
        if self.profile_menu.is_open() {
            let menu = menu_area(area, layout.top_bar, USER_ACTIONS.len());
            render_profile_menu(frame, menu, &USER_ACTIONS, &self.profile_menu, palette);
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit, including when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal(self.mouse)?;
        let result = self.event_loop(&mut terminal);
        let restored = Self::teardown_terminal(&mut terminal);
        result.and(restored)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;
        tracing::debug!(width = size.width, height = size.height, "dashboard started");

        let tick_rate = Duration::from_millis(250);

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(tick_rate)? {
                TuiMessage::from_event(&event::read()?)
            } else {
                Some(TuiMessage::Tick)
            };
            if let Some(msg) = msg {
                self.handle_message(msg);
            }
        }
        Ok(())
    }
}
