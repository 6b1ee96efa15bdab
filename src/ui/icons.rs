// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the shell's stroke icons.
//!
//! Icons are 24×24 outline SVGs embedded as string constants. They are drawn
//! in black and tinted at render time, so one source serves both themes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Glyph};
//!
//! let menu = icons::sized(icons::glyph(Glyph::Menu), sizing::ICON_MD);
//! ```

use crate::content::FeatureIcon;
use crate::navigation::Icon;
use iced::widget::svg::{self, Svg};
use iced::{Color, Length, Theme};

macro_rules! outline {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

const HOME_SVG: &str = outline!(
    r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
);
const DOWNLOAD_SVG: &str = outline!(
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#
);
const SETTINGS_SVG: &str = outline!(
    r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#
);
const TERMINAL_SVG: &str = outline!(
    r#"<polyline points="4 17 10 11 4 5"/><line x1="12" x2="20" y1="19" y2="19"/>"#
);
const PUZZLE_SVG: &str = outline!(
    r#"<path d="M19.439 7.85c-.049.322.059.648.289.878l1.568 1.568c.47.47.706 1.087.706 1.704s-.235 1.233-.706 1.704l-1.611 1.611a.98.98 0 0 1-.837.276c-.47-.07-.802-.48-.968-.925a2.501 2.501 0 1 0-3.214 3.214c.446.166.855.497.925.968a.979.979 0 0 1-.276.837l-1.61 1.61a2.404 2.404 0 0 1-1.705.707 2.402 2.402 0 0 1-1.704-.706l-1.568-1.568a1.026 1.026 0 0 0-.877-.29c-.493.074-.84.504-1.02.968a2.5 2.5 0 1 1-3.237-3.237c.464-.18.894-.527.967-1.02a1.026 1.026 0 0 0-.289-.877l-1.568-1.568A2.402 2.402 0 0 1 1.998 12c0-.617.236-1.234.706-1.704L4.23 8.77c.24-.24.581-.353.917-.303.515.077.877.528 1.073 1.01a2.5 2.5 0 1 0 3.259-3.259c-.482-.196-.933-.558-1.01-1.073-.05-.336.062-.676.303-.917l1.525-1.525A2.402 2.402 0 0 1 12 1.998c.617 0 1.234.236 1.704.706l1.568 1.568c.23.23.556.338.877.29.493-.074.84-.504 1.02-.968a2.5 2.5 0 1 1 3.237 3.237c-.464.18-.894.527-.967 1.02Z"/>"#
);
const SERVER_SVG: &str = outline!(
    r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"/><rect width="20" height="8" x="2" y="14" rx="2" ry="2"/><line x1="6" x2="6.01" y1="6" y2="6"/><line x1="6" x2="6.01" y1="18" y2="18"/>"#
);
const HELP_CIRCLE_SVG: &str = outline!(
    r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#
);
const FILE_TEXT_SVG: &str = outline!(
    r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#
);
const MENU_SVG: &str = outline!(
    r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
);
const MOON_SVG: &str = outline!(r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#);
const SUN_SVG: &str = outline!(
    r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
);
const GITHUB_SVG: &str = outline!(
    r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
);
const COPY_SVG: &str = outline!(
    r#"<rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#
);
const CHECK_SVG: &str = outline!(r#"<path d="M20 6 9 17l-5-5"/>"#);
const CLOSE_SVG: &str = outline!(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#);
const ALERT_SVG: &str = outline!(
    r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
);
const INFO_SVG: &str = outline!(
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
);
const ARROW_RIGHT_SVG: &str = outline!(r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#);
const EXTERNAL_LINK_SVG: &str = outline!(
    r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
);
const ROUTE_SVG: &str = outline!(
    r#"<circle cx="6" cy="19" r="3"/><path d="M9 19h8.5a3.5 3.5 0 0 0 0-7h-11a3.5 3.5 0 0 1 0-7H15"/><circle cx="18" cy="5" r="3"/>"#
);
const SHIELD_SVG: &str = outline!(
    r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
);
const ZAP_SVG: &str = outline!(
    r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
);
const REFRESH_SVG: &str = outline!(
    r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#
);

/// Shell icons that are not tied to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Moon,
    Sun,
    Github,
    Copy,
    Check,
    Close,
    Alert,
    Info,
    ArrowRight,
    ExternalLink,
}

fn glyph_source(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Menu => MENU_SVG,
        Glyph::Moon => MOON_SVG,
        Glyph::Sun => SUN_SVG,
        Glyph::Github => GITHUB_SVG,
        Glyph::Copy => COPY_SVG,
        Glyph::Check => CHECK_SVG,
        Glyph::Close => CLOSE_SVG,
        Glyph::Alert => ALERT_SVG,
        Glyph::Info => INFO_SVG,
        Glyph::ArrowRight => ARROW_RIGHT_SVG,
        Glyph::ExternalLink => EXTERNAL_LINK_SVG,
    }
}

fn route_source(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => HOME_SVG,
        Icon::Download => DOWNLOAD_SVG,
        Icon::Settings => SETTINGS_SVG,
        Icon::Terminal => TERMINAL_SVG,
        Icon::Puzzle => PUZZLE_SVG,
        Icon::Server => SERVER_SVG,
        Icon::HelpCircle => HELP_CIRCLE_SVG,
        Icon::FileText => FILE_TEXT_SVG,
    }
}

fn feature_source(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Routing => ROUTE_SVG,
        FeatureIcon::Shield => SHIELD_SVG,
        FeatureIcon::Zap => ZAP_SVG,
        FeatureIcon::Refresh => REFRESH_SVG,
    }
}

fn from_source(source: &'static str) -> Svg<'static, Theme> {
    Svg::new(svg::Handle::from_memory(source.as_bytes()))
}

/// Icon tinted with the theme's text color.
#[must_use]
pub fn glyph(glyph: Glyph) -> Svg<'static, Theme> {
    from_source(glyph_source(glyph)).style(tinted_text)
}

/// Navigation icon tinted with the theme's text color.
#[must_use]
pub fn route(icon: Icon) -> Svg<'static, Theme> {
    from_source(route_source(icon)).style(tinted_text)
}

/// Navigation icon tinted with a fixed color (active entries).
#[must_use]
pub fn route_colored(icon: Icon, color: Color) -> Svg<'static, Theme> {
    from_source(route_source(icon)).style(move |_theme: &Theme, _status| svg::Style {
        color: Some(color),
    })
}

/// Glyph tinted with a fixed color (severity accents, copy confirmation).
#[must_use]
pub fn glyph_colored(glyph: Glyph, color: Color) -> Svg<'static, Theme> {
    from_source(glyph_source(glyph)).style(move |_theme: &Theme, _status| svg::Style {
        color: Some(color),
    })
}

/// Home page feature icon tinted with a fixed color.
#[must_use]
pub fn feature(icon: FeatureIcon, color: Color) -> Svg<'static, Theme> {
    from_source(feature_source(icon)).style(move |_theme: &Theme, _status| svg::Style {
        color: Some(color),
    })
}

/// Sets a square size on an icon.
#[must_use]
pub fn sized(icon: Svg<'static, Theme>, size: f32) -> Svg<'static, Theme> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

fn tinted_text(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    #[test]
    fn sources_are_complete_svg_documents() {
        let sources = Route::ALL
            .iter()
            .map(|r| route_source(r.icon()))
            .chain([MENU_SVG, MOON_SVG, SUN_SVG, COPY_SVG, CHECK_SVG])
            .chain([ROUTE_SVG, SHIELD_SVG, ZAP_SVG, REFRESH_SVG]);

        for source in sources {
            assert!(source.starts_with("<svg "));
            assert!(source.ends_with("</svg>"));
            assert!(source.contains(r#"viewBox="0 0 24 24""#));
        }
    }

    #[test]
    fn every_route_has_a_distinct_icon() {
        let mut seen: Vec<&str> = Route::ALL
            .iter()
            .map(|r| route_source(r.icon()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Route::ALL.len());
    }
}
