// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the shell, the page and
//! the platform.
//!
//! The `App` struct owns every piece of shared state (language, theme,
//! location, toasts) and the platform ports. Components receive references
//! for rendering and report back through events, so each piece of state has a
//! single writer: this module and its update handlers.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{shortcut, shortcut_for_key};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::content;
use crate::i18n::I18n;
use crate::navigation::{Location, Router};
use crate::platform::{
    ClipboardWriter, ColorSchemeSource, FileStore, LinkOpener, LocaleSource, PreferenceStore,
    SystemBrowser, SystemClipboard, SystemColorScheme, SystemLocale,
};
use crate::ui::notifications::{self, Notification};
use crate::ui::page::PageState;
use crate::ui::shell::ShellState;
use crate::ui::theming::ThemeManager;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Platform ports the application talks to.
///
/// [`Platform::system`] wires the real adapters; tests pass in-memory fakes.
pub struct Platform {
    pub store: Box<dyn PreferenceStore>,
    pub locales: Box<dyn LocaleSource>,
    pub color_scheme: Box<dyn ColorSchemeSource>,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub browser: Box<dyn LinkOpener>,
}

impl Platform {
    /// System adapters with the preference store in the data directory.
    ///
    /// Returns the platform and an optional warning key from opening the store.
    pub fn system() -> (Self, Option<String>) {
        let (store, warning) = FileStore::open();
        let platform = Self {
            store: Box::new(store),
            locales: Box::new(SystemLocale),
            color_scheme: Box::new(SystemColorScheme),
            clipboard: Box::new(SystemClipboard::new()),
            browser: Box::new(SystemBrowser),
        };
        (platform, warning)
    }
}

/// Root Iced application state that bridges the shell, localization, theme
/// and persisted preferences.
pub struct App {
    store: Box<dyn PreferenceStore>,
    clipboard: Box<dyn ClipboardWriter>,
    browser: Box<dyn LinkOpener>,
    i18n: I18n,
    theme: ThemeManager,
    router: Router,
    shell: ShellState,
    page: PageState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.active())
            .field("dark", &self.theme.is_dark())
            .field("location", &self.router.location().path())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: Size::new(width as f32, height as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || {
        let (platform, store_warning) = Platform::system();
        let warnings = config_warning.iter().chain(&store_warning).cloned();
        (
            App::boot(flags.clone(), &config, platform, warnings),
            Task::none(),
        )
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Resolves language and theme, applies the startup flags and queues the
    /// given warning keys as toasts.
    pub fn boot(
        flags: Flags,
        config: &Config,
        platform: Platform,
        warnings: impl IntoIterator<Item = String>,
    ) -> Self {
        let Platform {
            mut store,
            locales,
            color_scheme,
            clipboard,
            browser,
        } = platform;

        let (mut i18n, language_warning) = I18n::new(store.as_mut(), locales.as_ref());
        let (theme, theme_warning) = ThemeManager::init(store.as_mut(), color_scheme.as_ref());

        let mut notifications = notifications::Manager::new();
        for key in warnings
            .into_iter()
            .chain(language_warning)
            .chain(theme_warning)
        {
            notifications.push(Notification::warning(key));
        }

        if let Some(code) = flags.lang.as_deref() {
            if let Err(err) = i18n.set_active(code, store.as_mut()) {
                update::push_error(&mut notifications, &err);
            }
        }

        let location = Location::parse(flags.route.as_deref().unwrap_or(config.start_route()));
        tracing::info!(location = location.path(), "starting shell");

        Self {
            store,
            clipboard,
            browser,
            i18n,
            theme,
            router: Router::new(location),
            shell: ShellState::new(config.window_size().0 as f32),
            page: PageState::new(),
            notifications,
        }
    }

    /// Window title: the current page title followed by the product name.
    pub fn title(&self) -> String {
        let title_key = self
            .router
            .active_route()
            .map_or(content::NOT_FOUND_TITLE_KEY, |route| {
                content::page_for(route).title_key
            });
        let page = self.i18n.tr(title_key);
        self.i18n.tr_with_args("app.windowTitle", &[("page", page.as_str())])
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            store: self.store.as_mut(),
            i18n: &mut self.i18n,
            theme: &mut self.theme,
            router: &mut self.router,
            shell: &mut self.shell,
            page: &mut self.page,
            notifications: &mut self.notifications,
            clipboard: self.clipboard.as_mut(),
            browser: self.browser.as_mut(),
        };

        match message {
            Message::Shell(shell_message) => update::handle_shell_message(&mut ctx, shell_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.shell.resize(size);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            router: &self.router,
            is_dark: self.theme.is_dark(),
            shell: &self.shell,
            page: &self.page,
            notifications: &self.notifications,
        })
    }

    /// Navigates programmatically, with the same resets as a link.
    pub fn navigate_to(&mut self, path: &str) {
        if self.router.navigate(Location::parse(path)) {
            self.page.reset();
        }
        self.shell.on_navigated();
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}
