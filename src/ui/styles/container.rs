// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Colors come from [`ColorScheme::for_theme`], so every surface follows the
//! light/dark toggle without holding theme state of its own.

use crate::content::Tone;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Desktop sidebar and drawer panel.
pub fn sidebar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drawer panel floating above the scrim.
pub fn drawer(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..sidebar(theme)
    }
}

/// Semi-transparent backdrop behind the drawer.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).scrim)),
        ..Default::default()
    }
}

/// Header bar.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Horizontal rule between the brand row and the navigation.
pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).border)),
        ..Default::default()
    }
}

/// Code sample frame.
pub fn code_block(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.code_background)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Title bar of a code sample.
pub fn code_title(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(colors.text_muted),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Small rounded label (version, language tag, inline code).
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.border)),
        text_color: Some(colors.text_muted),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bordered card (feature grid, table).
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Tab strip background.
pub fn tab_list(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).surface_secondary)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tinted note box.
pub fn callout(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let accent = match tone {
            Tone::Info => colors.info,
            Tone::Warning => colors.warning,
            Tone::Danger => colors.error,
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SUBTLE / 2.0,
                ..accent
            })),
            text_color: Some(colors.text_primary),
            border: Border {
                color: Color {
                    a: opacity::SUBTLE * 2.0,
                    ..accent
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callout_border_follows_tone() {
        let danger = callout(Tone::Danger)(&Theme::Light);
        let info = callout(Tone::Info)(&Theme::Light);
        assert_ne!(danger.border.color, info.border.color);
    }

    #[test]
    fn page_background_switches_with_theme() {
        assert_ne!(page(&Theme::Light).background, page(&Theme::Dark).background);
    }
}
