// SPDX-License-Identifier: MPL-2.0
//! Persistent chrome around page content.
//!
//! Wide windows get a fixed sidebar next to the page. Narrow windows get a
//! header menu button that opens the same navigation as a drawer over the
//! page. Both render [`navigation::routes`] in order.
//!
//! The shell owns only the drawer flag and the current window width. Language,
//! theme and location belong to the application and are read through
//! [`ViewContext`].

pub mod header;
pub mod sidebar;

use crate::config::DESKTOP_BREAKPOINT;
use crate::i18n::{I18n, LanguageEntry};
use crate::navigation::{self, Location, Route};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::page;
use crate::ui::styles;
use iced::widget::{mouse_area, scrollable, Column, Container, Row, Space, Stack};
use iced::{Element, Length, Size};

/// Messages emitted by the shell and the page inside it.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    /// A sidebar entry was activated.
    Navigate(Route),
    /// A drawer entry was activated.
    DrawerNavigate(Route),
    SelectLanguage(LanguageEntry),
    ToggleTheme,
    OpenRepository,
    Page(page::Message),
}

/// Events propagated to the application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Route),
    SelectLanguage(&'static str),
    ToggleTheme,
    OpenRepository,
    Page(page::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    drawer_open: bool,
    width: f32,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(DESKTOP_BREAKPOINT)
    }
}

impl ShellState {
    /// Shell for a window of the given logical width, drawer closed.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            drawer_open: false,
            width,
        }
    }

    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Whether the window is wide enough for the fixed sidebar.
    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.width >= DESKTOP_BREAKPOINT
    }

    /// Records a new window size. Growing past the breakpoint drops the drawer.
    pub fn resize(&mut self, size: Size) {
        self.width = size.width;
        if self.is_desktop() {
            self.drawer_open = false;
        }
    }

    /// Resets shell-local state after the location changed.
    pub fn on_navigated(&mut self) {
        self.drawer_open = false;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                Event::None
            }
            Message::CloseDrawer => {
                self.drawer_open = false;
                Event::None
            }
            Message::Navigate(route) => Event::Navigate(route),
            Message::DrawerNavigate(route) => {
                self.drawer_open = false;
                Event::Navigate(route)
            }
            Message::SelectLanguage(entry) => Event::SelectLanguage(entry.code),
            Message::ToggleTheme => Event::ToggleTheme,
            Message::OpenRepository => Event::OpenRepository,
            Message::Page(message) => Event::Page(message),
        }
    }
}

/// Contextual data needed to render the shell.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a Location,
    pub is_dark: bool,
    pub state: &'a ShellState,
}

/// Renders the frame with `content` as the page body.
pub fn view<'a>(ctx: ViewContext<'a>, content: Element<'a, Message>) -> Element<'a, Message> {
    let desktop = ctx.state.is_desktop();

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        is_dark: ctx.is_dark,
        show_menu: !desktop,
    });

    let body = scrollable(
        Container::new(
            Container::new(content)
                .width(Length::Fill)
                .max_width(sizing::CONTENT_MAX_WIDTH),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let main = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body);

    let frame: Element<'a, Message> = if desktop {
        Row::new()
            .push(sidebar::view(
                sidebar::ViewContext {
                    i18n: ctx.i18n,
                    location: ctx.location,
                },
                Message::Navigate,
            ))
            .push(main)
            .into()
    } else {
        main.into()
    };

    let frame = Container::new(frame)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    if desktop || !ctx.state.drawer_open() {
        return frame.into();
    }

    let scrim = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::CloseDrawer);

    let drawer = sidebar::view(
        sidebar::ViewContext {
            i18n: ctx.i18n,
            location: ctx.location,
        },
        Message::DrawerNavigate,
    );

    Stack::new()
        .push(frame)
        .push(scrim)
        .push(
            Container::new(drawer)
                .height(Length::Fill)
                .style(styles::container::drawer),
        )
        .into()
}

/// Routes in navigation order with their active flag for `location`.
#[must_use]
pub fn nav_entries(location: &Location) -> Vec<(Route, bool)> {
    navigation::routes()
        .iter()
        .map(|route| (*route, navigation::is_active(route.path(), location)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> ShellState {
        ShellState::new(DESKTOP_BREAKPOINT - 1.0)
    }

    #[test]
    fn drawer_starts_closed() {
        assert!(!narrow().drawer_open());
    }

    #[test]
    fn toggle_opens_and_closes_drawer() {
        let mut state = narrow();
        assert!(matches!(state.update(Message::ToggleDrawer), Event::None));
        assert!(state.drawer_open());
        state.update(Message::ToggleDrawer);
        assert!(!state.drawer_open());
    }

    #[test]
    fn drawer_navigation_closes_drawer() {
        let mut state = narrow();
        state.update(Message::ToggleDrawer);

        let event = state.update(Message::DrawerNavigate(Route::Usage));

        assert!(matches!(event, Event::Navigate(Route::Usage)));
        assert!(!state.drawer_open());
    }

    #[test]
    fn sidebar_navigation_leaves_drawer_to_the_navigation_reset() {
        let mut state = narrow();
        state.update(Message::ToggleDrawer);

        let event = state.update(Message::Navigate(Route::Service));
        assert!(matches!(event, Event::Navigate(Route::Service)));
        assert!(state.drawer_open());

        state.on_navigated();
        assert!(!state.drawer_open());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(ShellState::new(DESKTOP_BREAKPOINT).is_desktop());
        assert!(!narrow().is_desktop());
    }

    #[test]
    fn widening_the_window_drops_the_drawer() {
        let mut state = narrow();
        state.update(Message::ToggleDrawer);

        state.resize(Size::new(1400.0, 800.0));

        assert!(state.is_desktop());
        assert!(!state.drawer_open());
    }

    #[test]
    fn language_selection_emits_code() {
        let mut state = ShellState::default();
        let entry = LanguageEntry {
            code: "ja",
            label: "日本語",
        };
        assert!(matches!(
            state.update(Message::SelectLanguage(entry)),
            Event::SelectLanguage("ja")
        ));
    }

    #[test]
    fn nav_entries_follow_route_order_and_mark_exact_match() {
        let location = Location::parse("/providers");
        let entries = nav_entries(&location);

        let routes: Vec<Route> = entries.iter().map(|(route, _)| *route).collect();
        assert_eq!(routes, Route::ALL);

        let active: Vec<Route> = entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(route, _)| *route)
            .collect();
        assert_eq!(active, [Route::Providers]);
    }

    #[test]
    fn nested_path_marks_nothing_active() {
        let location = Location::parse("/providers/kimi");
        assert!(nav_entries(&location).iter().all(|(_, active)| !active));
    }
}
