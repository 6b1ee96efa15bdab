// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::rc::Rc;

use iced::keyboard::{key::Named, Key, Modifiers};
use summon_docs::app::{shortcut_for_key, App, Flags, Message, Platform};
use summon_docs::config::{self, Config, ShellConfig, WindowConfig, REPOSITORY_URL};
use summon_docs::content;
use summon_docs::error::{Error, Result};
use summon_docs::i18n::{I18n, LANGUAGES};
use summon_docs::navigation::Route;
use summon_docs::platform::{
    ClipboardWriter, FixedColorScheme, FixedLocales, LinkOpener, MemoryStore,
    LANGUAGE_KEY, THEME_KEY,
};
use summon_docs::ui::code_block::{self, CodeBlockId};
use summon_docs::ui::{page, shell};
use tempfile::tempdir;

const SHELL_KEYS: &[&str] = &[
    "app.windowTitle",
    "shell.menu",
    "shell.toggleTheme",
    "shell.language",
    "shell.github",
    "codeBlock.copy",
    "codeBlock.copied",
    "notification.configParseError",
    "notification.configReadError",
    "notification.statePathError",
    "notification.stateParseError",
    "notification.stateWriteError",
    "notification.copyFailed",
    "notification.openLinkFailed",
    "notification.unsupportedLanguage",
];

#[derive(Clone, Default)]
struct SharedClipboard {
    written: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl ClipboardWriter for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("no clipboard".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl LinkOpener for SharedOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct Harness {
    store: MemoryStore,
    locales: Vec<&'static str>,
    dark: Option<bool>,
    clipboard: SharedClipboard,
    opener: SharedOpener,
    config: Config,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            locales: vec!["en-US"],
            dark: Some(false),
            clipboard: SharedClipboard::default(),
            opener: SharedOpener::default(),
            config: Config::default(),
        }
    }

    fn narrow(mut self) -> Self {
        self.config.window = WindowConfig {
            width: Some(600),
            height: Some(800),
        };
        self
    }

    fn boot(&self, flags: Flags) -> App {
        self.boot_with_warnings(flags, Vec::new())
    }

    fn boot_with_warnings(&self, flags: Flags, warnings: Vec<String>) -> App {
        let platform = Platform {
            store: Box::new(self.store.clone()),
            locales: Box::new(FixedLocales::new(self.locales.iter().copied())),
            color_scheme: Box::new(FixedColorScheme(self.dark)),
            clipboard: Box::new(self.clipboard.clone()),
            browser: Box::new(self.opener.clone()),
        };
        App::boot(flags, &self.config, platform, warnings)
    }
}

fn flags_with_route(route: &str) -> Flags {
    Flags {
        route: Some(route.to_string()),
        ..Flags::default()
    }
}

fn page_message(message: page::Message) -> Message {
    Message::Shell(shell::Message::Page(message))
}

fn copy_message(code: &'static str) -> Message {
    page_message(page::Message::CodeBlock(code_block::Message::Copy {
        block: CodeBlockId(0),
        code,
    }))
}

fn toast_keys(app: &App) -> Vec<String> {
    app.notifications()
        .visible()
        .map(|notification| notification.message_key().to_string())
        .collect()
}

#[test]
fn every_page_key_is_translated_in_every_language() {
    let i18n = I18n::default();

    for key in content::all_keys().into_iter().chain(SHELL_KEYS.iter().copied()) {
        assert_ne!(i18n.tr(key), key, "missing english text for {key}");
        for language in &LANGUAGES {
            assert!(
                i18n.has_key(language.code, key),
                "{} has no entry for {key}",
                language.code
            );
        }
    }

    for route in Route::ALL {
        for language in &LANGUAGES {
            assert!(i18n.has_key(language.code, route.label_key()));
        }
    }
}

#[test]
fn window_title_names_the_current_page() {
    let harness = Harness::new();

    assert_eq!(harness.boot(Flags::default()).title(), "Summon - Summon");
    assert_eq!(harness.boot(flags_with_route("/usage")).title(), "Usage - Summon");
}

#[test]
fn unknown_route_shows_not_found_title() {
    let app = Harness::new().boot(flags_with_route("/nope"));

    assert_eq!(app.router().active_route(), None);
    assert_eq!(app.title(), "Page not found - Summon");
    let _ = app.view();
}

#[test]
fn configured_start_route_is_used_without_flag() {
    let mut harness = Harness::new();
    harness.config.shell = ShellConfig {
        start_route: Some("/service".to_string()),
    };

    let app = harness.boot(Flags::default());
    assert_eq!(app.router().active_route(), Some(Route::Service));

    let app = harness.boot(flags_with_route("/changelog"));
    assert_eq!(app.router().active_route(), Some(Route::Changelog));
}

#[test]
fn system_locale_picks_the_startup_language() {
    let mut harness = Harness::new();
    harness.locales = vec!["ja-JP", "en-US"];

    let app = harness.boot(Flags::default());

    assert_eq!(app.i18n().active(), "ja");
    assert_eq!(app.store().get(LANGUAGE_KEY).as_deref(), Some("ja"));
}

#[test]
fn lang_flag_overrides_and_persists() {
    let app = Harness::new().boot(Flags {
        lang: Some("de".to_string()),
        ..Flags::default()
    });

    assert_eq!(app.i18n().active(), "de");
    assert_eq!(app.store().get(LANGUAGE_KEY).as_deref(), Some("de"));
    assert!(toast_keys(&app).is_empty());
}

#[test]
fn unsupported_lang_flag_warns_and_keeps_resolved_language() {
    let app = Harness::new().boot(Flags {
        lang: Some("fr".to_string()),
        ..Flags::default()
    });

    assert_eq!(app.i18n().active(), "en");
    let toast = app
        .notifications()
        .visible()
        .find(|n| n.message_key() == "notification.unsupportedLanguage")
        .expect("unsupported language toast");
    assert_eq!(
        toast.message_args(),
        &[("code".to_string(), "fr".to_string())]
    );
}

#[test]
fn boot_warnings_become_toasts() {
    let app = Harness::new().boot_with_warnings(
        Flags::default(),
        vec!["notification.configParseError".to_string()],
    );

    assert_eq!(toast_keys(&app), ["notification.configParseError"]);
}

#[test]
fn language_switch_is_persisted() {
    let mut app = Harness::new().boot(Flags::default());
    let korean = LANGUAGES
        .iter()
        .find(|entry| entry.code == "ko")
        .copied()
        .expect("korean registered");

    let _ = app.update(Message::Shell(shell::Message::SelectLanguage(korean)));

    assert_eq!(app.i18n().active(), "ko");
    assert_eq!(app.store().get(LANGUAGE_KEY).as_deref(), Some("ko"));
    assert_eq!(app.i18n().tr("nav.home"), "홈");
}

#[test]
fn theme_toggle_is_persisted() {
    let mut app = Harness::new().boot(Flags::default());
    assert!(!app.theme_manager().is_dark());

    let _ = app.update(Message::Shell(shell::Message::ToggleTheme));
    assert!(app.theme_manager().is_dark());
    assert_eq!(app.store().get(THEME_KEY).as_deref(), Some("dark"));

    let _ = app.update(Message::Shell(shell::Message::ToggleTheme));
    assert_eq!(app.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn stored_theme_wins_over_system_preference() {
    let mut harness = Harness::new();
    harness.store = MemoryStore::with_entries([(THEME_KEY, "light")]);
    harness.dark = Some(true);

    assert!(!harness.boot(Flags::default()).theme_manager().is_dark());
}

#[test]
fn navigation_closes_the_drawer() {
    let mut app = Harness::new().narrow().boot(Flags::default());
    assert!(!app.shell().is_desktop());

    let _ = app.update(Message::Shell(shell::Message::ToggleDrawer));
    assert!(app.shell().drawer_open());
    let _ = app.view();

    let _ = app.update(Message::Shell(shell::Message::DrawerNavigate(
        Route::Providers,
    )));

    assert!(!app.shell().drawer_open());
    assert_eq!(app.router().active_route(), Some(Route::Providers));
    assert_eq!(app.title(), "Providers - Summon");
}

#[test]
fn in_page_link_navigates_and_resets_tabs() {
    let mut app = Harness::new().boot(flags_with_route("/installation"));
    let group = page::TabGroupId(0);

    let _ = app.update(page_message(page::Message::SelectTab { group, index: 2 }));
    assert_eq!(app.page().selected_tab(group), 2);

    let _ = app.update(page_message(page::Message::Navigate(Route::Installation)));
    assert_eq!(app.page().selected_tab(group), 2);

    let _ = app.update(page_message(page::Message::Navigate(Route::Usage)));
    assert_eq!(app.router().active_route(), Some(Route::Usage));
    assert_eq!(app.page().selected_tab(group), 0);
}

#[test]
fn resizing_past_the_breakpoint_closes_the_drawer() {
    let mut app = Harness::new().narrow().boot(Flags::default());
    let _ = app.update(Message::Shell(shell::Message::ToggleDrawer));

    let _ = app.update(Message::WindowResized(iced::Size::new(1400.0, 900.0)));

    assert!(app.shell().is_desktop());
    assert!(!app.shell().drawer_open());
}

#[test]
fn copy_writes_trimmed_sample_and_acknowledges() {
    let harness = Harness::new();
    let mut app = harness.boot(Flags::default());

    let _ = app.update(copy_message("  summon --help\n"));

    assert_eq!(*harness.clipboard.written.borrow(), ["summon --help"]);
    assert!(app.page().is_acknowledged(CodeBlockId(0)));
    assert!(toast_keys(&app).is_empty());
}

#[test]
fn copy_failure_shows_a_warning() {
    let mut harness = Harness::new();
    harness.clipboard.fail = true;
    let mut app = harness.boot(Flags::default());

    let _ = app.update(copy_message("summon"));

    assert!(!app.page().is_acknowledged(CodeBlockId(0)));
    assert_eq!(toast_keys(&app), ["notification.copyFailed"]);
}

#[test]
fn repository_button_opens_the_repository() {
    let harness = Harness::new();
    let mut app = harness.boot(Flags::default());

    let _ = app.update(Message::Shell(shell::Message::OpenRepository));

    assert_eq!(*harness.opener.opened.borrow(), [REPOSITORY_URL]);
}

#[test]
fn shortcuts_reach_the_shell() {
    let mut app = Harness::new().narrow().boot(Flags::default());

    let toggle = shortcut_for_key(&Key::Character("d".into()), Modifiers::COMMAND)
        .expect("theme shortcut");
    let _ = app.update(toggle);
    assert!(app.theme_manager().is_dark());

    let _ = app.update(Message::Shell(shell::Message::ToggleDrawer));
    let close =
        shortcut_for_key(&Key::Named(Named::Escape), Modifiers::empty()).expect("escape shortcut");
    let _ = app.update(close);
    assert!(!app.shell().drawer_open());
}

#[test]
fn every_route_renders_in_every_language() {
    let mut app = Harness::new().narrow().boot(Flags::default());

    for language in &LANGUAGES {
        let _ = app.update(Message::Shell(shell::Message::SelectLanguage(*language)));
        for route in Route::ALL {
            app.navigate_to(route.path());
            assert!(!app.title().contains('.'), "untranslated title on {route}");
            let _ = app.view();
        }
    }
}

#[test]
fn start_route_is_read_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[shell]\nstart_route = \"/troubleshooting\"\n")
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.start_route(), "/troubleshooting");

    let mut harness = Harness::new();
    harness.config = loaded;
    assert_eq!(
        harness.boot(Flags::default()).router().active_route(),
        Some(Route::Troubleshooting)
    );
}
