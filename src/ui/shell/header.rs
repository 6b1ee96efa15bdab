// SPDX-License-Identifier: MPL-2.0
//! Header bar: drawer button and brand on narrow windows, then the language
//! switcher, theme toggle and repository link.

use super::sidebar;
use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, pick_list, text, tooltip, Container, Row, Space};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
    /// Narrow layout: show the button that opens the drawer.
    pub show_menu: bool,
}

/// Items left of the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leading {
    Menu,
    Brand,
}

/// The sidebar carries the brand on wide windows, so the header only adds it
/// next to the drawer button.
#[must_use]
pub fn leading_items(show_menu: bool) -> &'static [Leading] {
    if show_menu {
        &[Leading::Menu, Leading::Brand]
    } else {
        &[]
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::MD]);

    for item in leading_items(ctx.show_menu) {
        row = match item {
            Leading::Menu => row.push(icon_button(
                Glyph::Menu,
                ctx.i18n.tr("shell.menu"),
                Message::ToggleDrawer,
            )),
            Leading::Brand => row.push(sidebar::brand_text()),
        };
    }

    let languages = pick_list(
        ctx.i18n.available_languages(),
        Some(*ctx.i18n.active_language()),
        Message::SelectLanguage,
    )
    .text_size(typography::BODY)
    .padding([spacing::XXS, spacing::SM]);

    // The icon shows the theme a click switches to.
    let theme_glyph = if ctx.is_dark { Glyph::Sun } else { Glyph::Moon };

    row = row
        .push(Space::new().width(Length::Fill))
        .push(
            tooltip::Tooltip::new(
                languages,
                text(ctx.i18n.tr("shell.language")).size(typography::CAPTION),
                tooltip::Position::Bottom,
            )
            .gap(spacing::XXS)
            .padding(spacing::XS)
            .style(container::rounded_box),
        )
        .push(icon_button(
            theme_glyph,
            ctx.i18n.tr("shell.toggleTheme"),
            Message::ToggleTheme,
        ))
        .push(icon_button(
            Glyph::Github,
            ctx.i18n.tr("shell.github"),
            Message::OpenRepository,
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

fn icon_button<'a>(glyph: Glyph, label: String, message: Message) -> Element<'a, Message> {
    let button = button(icons::sized(icons::glyph(glyph), sizing::ICON_MD))
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    tooltip::Tooltip::new(
        button,
        text(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .padding(spacing::XS)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_header_shows_brand_after_menu_button() {
        assert_eq!(leading_items(true), &[Leading::Menu, Leading::Brand]);
    }

    #[test]
    fn wide_header_leaves_brand_to_sidebar() {
        assert!(leading_items(false).is_empty());
    }
}
