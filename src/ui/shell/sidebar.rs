// SPDX-License-Identifier: MPL-2.0
//! Brand block and route list, shared by the desktop sidebar and the drawer.

use super::{nav_entries, Message};
use crate::config::DOCUMENTED_VERSION;
use crate::i18n::I18n;
use crate::navigation::{Location, Route};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a Location,
}

const BRAND: &str = "🔮 Summon";

/// Product name, shared with the narrow header.
pub(super) fn brand_text<'a>() -> Text<'a> {
    Text::new(BRAND)
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
}

/// Renders the panel; `on_select` builds the message of an activated entry.
pub fn view<'a>(ctx: ViewContext<'a>, on_select: fn(Route) -> Message) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            brand_text(),
        )
        .push(
            Container::new(Text::new(DOCUMENTED_VERSION).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::badge),
        );

    let entries = nav_entries(ctx.location).into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, (route, active)| column.push(nav_item(ctx.i18n, route, active, on_select)),
    );

    let column = Column::new()
        .spacing(spacing::LG)
        .push(
            Container::new(brand)
                .height(Length::Fixed(sizing::HEADER_HEIGHT))
                .align_y(Vertical::Center),
        )
        .push(scrollable(entries).height(Length::Fill));

    Container::new(column)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding([0.0, spacing::MD])
        .style(styles::container::sidebar)
        .into()
}

fn nav_item<'a>(
    i18n: &'a I18n,
    route: Route,
    active: bool,
    on_select: fn(Route) -> Message,
) -> Element<'a, Message> {
    let icon = if active {
        icons::route_colored(route.icon(), ColorScheme::light().brand_text)
    } else {
        icons::route(route.icon())
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD))
        .push(Text::new(i18n.tr(route.label_key())).size(typography::BODY));

    button(content)
        .on_press(on_select(route))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_item(active))
        .into()
}
