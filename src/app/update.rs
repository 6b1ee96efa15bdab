// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component updates return events; this module turns them into changes of
//! the application-owned state (language, theme, location) and into platform
//! side effects (preference writes, clipboard, browser). Every failure ends
//! as a warning toast.

use super::Message;
use crate::config::REPOSITORY_URL;
use crate::error::Error;
use crate::i18n::I18n;
use crate::navigation::{Location, Router};
use crate::platform::{ClipboardWriter, LinkOpener, PreferenceStore};
use crate::ui::notifications::{self, Notification};
use crate::ui::page::{self, PageState};
use crate::ui::shell::{self, ShellState};
use crate::ui::theming::ThemeManager;
use iced::Task;

/// Mutable state the update handlers work on.
pub struct UpdateContext<'a> {
    pub store: &'a mut dyn PreferenceStore,
    pub i18n: &'a mut I18n,
    pub theme: &'a mut ThemeManager,
    pub router: &'a mut Router,
    pub shell: &'a mut ShellState,
    pub page: &'a mut PageState,
    pub notifications: &'a mut notifications::Manager,
    pub clipboard: &'a mut dyn ClipboardWriter,
    pub browser: &'a mut dyn LinkOpener,
}

pub fn handle_shell_message(ctx: &mut UpdateContext<'_>, message: shell::Message) -> Task<Message> {
    match ctx.shell.update(message) {
        shell::Event::None => Task::none(),
        shell::Event::Navigate(route) => {
            navigate(ctx, route.into());
            Task::none()
        }
        shell::Event::SelectLanguage(code) => {
            if let Err(err) = ctx.i18n.set_active(code, ctx.store) {
                push_error(ctx.notifications, &err);
            }
            Task::none()
        }
        shell::Event::ToggleTheme => {
            if let Err(err) = ctx.theme.toggle(ctx.store) {
                push_error(ctx.notifications, &err);
            }
            Task::none()
        }
        shell::Event::OpenRepository => {
            open_external(ctx, REPOSITORY_URL);
            Task::none()
        }
        shell::Event::Page(message) => handle_page_message(ctx, message),
    }
}

fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    let (event, task) = ctx.page.update(message, ctx.clipboard);

    match event {
        page::Event::None => {}
        page::Event::Navigate(route) => navigate(ctx, route.into()),
        page::Event::OpenExternal(url) => open_external(ctx, url),
        page::Event::CopyFailed(err) => push_error(ctx.notifications, &err),
    }

    task.map(|message| Message::Shell(shell::Message::Page(message)))
}

/// Moves to `location`. Page state is dropped when the location changes; the
/// drawer closes on every navigation.
pub fn navigate(ctx: &mut UpdateContext<'_>, location: Location) {
    if ctx.router.navigate(location) {
        ctx.page.reset();
    }
    ctx.shell.on_navigated();
}

fn open_external(ctx: &mut UpdateContext<'_>, url: &str) {
    tracing::info!(url, "opening external link");
    if let Err(err) = ctx.browser.open(url) {
        tracing::warn!(url, error = %err, "failed to open external link");
        push_error(ctx.notifications, &err);
    }
}

/// Shows a recoverable error as a warning toast.
pub fn push_error(notifications: &mut notifications::Manager, err: &Error) {
    let notification = Notification::warning(err.i18n_key());
    let notification = match err {
        Error::UnsupportedLocale(code) => notification.with_arg("code", code.as_str()),
        _ => notification,
    };
    notifications.push(notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::platform::{FixedColorScheme, MemoryStore, RecordingOpener};
    use crate::ui::page;

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    struct NoBrowser;

    impl LinkOpener for NoBrowser {
        fn open(&mut self, url: &str) -> Result<()> {
            Err(Error::Browser(format!("cannot open {url}")))
        }
    }

    struct Fixture {
        store: MemoryStore,
        i18n: I18n,
        theme: ThemeManager,
        router: Router,
        shell: ShellState,
        page: PageState,
        notifications: notifications::Manager,
        clipboard: NullClipboard,
    }

    impl Fixture {
        fn new() -> Self {
            let mut store = MemoryStore::new();
            let (theme, _) = ThemeManager::init(&mut store, &FixedColorScheme(None));
            Self {
                store,
                i18n: I18n::default(),
                theme,
                router: Router::default(),
                shell: ShellState::default(),
                page: PageState::new(),
                notifications: notifications::Manager::new(),
                clipboard: NullClipboard,
            }
        }

        fn context<'a>(&'a mut self, browser: &'a mut dyn LinkOpener) -> UpdateContext<'a> {
            UpdateContext {
                store: &mut self.store,
                i18n: &mut self.i18n,
                theme: &mut self.theme,
                router: &mut self.router,
                shell: &mut self.shell,
                page: &mut self.page,
                notifications: &mut self.notifications,
                clipboard: &mut self.clipboard,
                browser,
            }
        }
    }

    #[test]
    fn repository_link_goes_to_the_browser() {
        let mut fixture = Fixture::new();
        let mut browser = RecordingOpener::default();

        let _ = handle_shell_message(
            &mut fixture.context(&mut browser),
            shell::Message::OpenRepository,
        );

        assert_eq!(browser.opened, [REPOSITORY_URL]);
        assert!(!fixture.notifications.has_notifications());
    }

    #[test]
    fn page_links_open_their_url() {
        let mut fixture = Fixture::new();
        let mut browser = RecordingOpener::default();
        let url = "https://github.com/TheMagicTower/summon/releases";

        let _ = handle_shell_message(
            &mut fixture.context(&mut browser),
            shell::Message::Page(page::Message::OpenExternal(url)),
        );

        assert_eq!(browser.opened, [url]);
    }

    #[test]
    fn browser_failure_becomes_a_warning() {
        let mut fixture = Fixture::new();
        let mut browser = NoBrowser;

        let _ = handle_shell_message(
            &mut fixture.context(&mut browser),
            shell::Message::OpenRepository,
        );

        let keys: Vec<_> = fixture
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, ["notification.openLinkFailed"]);
    }

    #[test]
    fn unsupported_locale_toast_carries_the_code() {
        let mut manager = notifications::Manager::new();

        push_error(&mut manager, &Error::UnsupportedLocale("fr".to_string()));

        let toast = manager.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification.unsupportedLanguage");
        assert_eq!(
            toast.message_args(),
            &[("code".to_string(), "fr".to_string())]
        );
    }
}
