// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (main call to action).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::HOVER,
            ..colors.brand_primary
        },
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.brand_text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bordered button on the page surface.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_secondary))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button (header, copy, drawer close).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_secondary))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_muted,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation entry; the active route is filled with the brand color.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let (background, text_color) = match (active, status) {
            (true, _) => (Some(colors.brand_primary), colors.brand_text),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                (Some(colors.surface_secondary), colors.text_primary)
            }
            (false, _) => (None, colors.text_muted),
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Tab trigger; the selected tab sits on the page surface.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let background = if selected {
            Some(Background::Color(colors.surface_primary))
        } else {
            None
        };
        let text_color = if selected || matches!(status, button::Status::Hovered) {
            colors.text_primary
        } else {
            colors.text_muted
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_nav_item_uses_brand_color() {
        let style = nav_item(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().brand_primary))
        );
    }

    #[test]
    fn inactive_nav_item_is_transparent_until_hovered() {
        let idle = nav_item(false)(&Theme::Dark, button::Status::Active);
        let hovered = nav_item(false)(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn primary_button_dims_on_hover() {
        let idle = primary(&Theme::Light, button::Status::Active);
        let hovered = primary(&Theme::Light, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }
}
