// SPDX-License-Identifier: MPL-2.0
//! Documentation page renderer.
//!
//! Turns a static [`Page`] into widgets and owns the per-page UI state: the
//! selected tab of every tab group and the copy acknowledgments of every
//! code sample. Both are dropped when the shell navigates.
//!
//! Code samples and tab groups are numbered in document order. Hidden tab
//! contents are counted too, so switching tabs never renumbers the samples
//! that follow.

use crate::content::{
    self, Action, Block, Callout, Cell, Feature, Label, LinkTarget, ListItem, Page, Release,
    Section, Tab, Table, Tone,
};
use crate::error::Error;
use crate::i18n::I18n;
use crate::navigation::Route;
use crate::platform::ClipboardWriter;
use crate::ui::code_block::{self, CodeBlockId, CopyTracker};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Task, Theme};
use std::collections::HashMap;

/// Position of a tab group on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabGroupId(pub usize);

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab { group: TabGroupId, index: usize },
    CodeBlock(code_block::Message),
    Navigate(Route),
    OpenExternal(&'static str),
}

/// Events propagated to the shell.
#[derive(Debug)]
pub enum Event {
    None,
    Navigate(Route),
    OpenExternal(&'static str),
    CopyFailed(Error),
}

/// UI state of the page currently shown.
#[derive(Debug, Default)]
pub struct PageState {
    selected_tabs: HashMap<TabGroupId, usize>,
    copies: CopyTracker,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tab of a group; the first tab until one is chosen.
    #[must_use]
    pub fn selected_tab(&self, group: TabGroupId) -> usize {
        self.selected_tabs.get(&group).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_acknowledged(&self, block: CodeBlockId) -> bool {
        self.copies.is_acknowledged(block)
    }

    /// Forgets tab selections and copy acknowledgments.
    pub fn reset(&mut self) {
        self.selected_tabs.clear();
        self.copies.clear();
    }

    pub fn update(
        &mut self,
        message: Message,
        clipboard: &mut dyn ClipboardWriter,
    ) -> (Event, Task<Message>) {
        match message {
            Message::SelectTab { group, index } => {
                self.selected_tabs.insert(group, index);
                (Event::None, Task::none())
            }
            Message::CodeBlock(code_block::Message::Copy { block, code }) => {
                match self.copies.copy(block, code, clipboard) {
                    Ok(reset) => (Event::None, reset.map(Message::CodeBlock)),
                    Err(err) => {
                        tracing::warn!(block = block.0, error = %err, "copy to clipboard failed");
                        (Event::CopyFailed(err), Task::none())
                    }
                }
            }
            Message::CodeBlock(code_block::Message::AcknowledgmentExpired {
                block,
                generation,
            }) => {
                self.copies.expire(block, generation);
                (Event::None, Task::none())
            }
            Message::Navigate(route) => (Event::Navigate(route), Task::none()),
            Message::OpenExternal(url) => (Event::OpenExternal(url), Task::none()),
        }
    }
}

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a PageState,
}

/// Running counters for samples and tab groups in document order.
#[derive(Debug, Default)]
struct Ids {
    code: usize,
    tabs: usize,
}

impl Ids {
    fn next_code(&mut self) -> CodeBlockId {
        let id = CodeBlockId(self.code);
        self.code += 1;
        id
    }

    fn next_tabs(&mut self) -> TabGroupId {
        let id = TabGroupId(self.tabs);
        self.tabs += 1;
        id
    }

    /// Advances past blocks that are not rendered.
    fn skip(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Code(_) => self.code += 1,
                Block::Tabs(tabs) => {
                    self.tabs += 1;
                    for tab in *tabs {
                        self.skip(tab.blocks);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Renders a documentation page.
pub fn view<'a>(page: &'static Page, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut ids = Ids::default();
    let mut column = Column::new()
        .spacing(spacing::XL)
        .push(page_header(
            ctx.i18n.tr(page.title_key),
            ctx.i18n.tr(page.description_key),
        ));

    for section in page.sections {
        column = column.push(build_section(section, &ctx, &mut ids));
    }

    column.into()
}

/// Renders the page shown for paths that match no route.
pub fn view_not_found<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let back = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(text(i18n.tr(content::NOT_FOUND_BACK_KEY)))
            .push(icons::sized(
                icons::glyph_colored(Glyph::ArrowRight, ColorScheme::light().brand_text),
                sizing::ICON_SM,
            )),
    )
    .on_press(Message::Navigate(Route::Home))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);

    Column::new()
        .spacing(spacing::LG)
        .push(page_header(
            i18n.tr(content::NOT_FOUND_TITLE_KEY),
            i18n.tr(content::NOT_FOUND_DESCRIPTION_KEY),
        ))
        .push(back)
        .into()
}

fn page_header<'a>(title: String, description: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_LG).font(bold()))
        .push(Text::new(description).size(typography::BODY_LG).style(muted))
        .into()
}

fn build_section<'a>(
    section: &'static Section,
    ctx: &ViewContext<'a>,
    ids: &mut Ids,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);
    if let Some(heading) = section.heading {
        column = column.push(
            Text::new(label(heading, ctx.i18n))
                .size(typography::TITLE_MD)
                .font(bold()),
        );
    }
    column.push(build_blocks(section.blocks, ctx, ids)).into()
}

fn build_blocks<'a>(
    blocks: &'static [Block],
    ctx: &ViewContext<'a>,
    ids: &mut Ids,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD);
    for block in blocks {
        column = column.push(build_block(block, ctx, ids));
    }
    column.into()
}

fn build_block<'a>(
    block: &'static Block,
    ctx: &ViewContext<'a>,
    ids: &mut Ids,
) -> Element<'a, Message> {
    match block {
        Block::Subheading(heading) => Text::new(label(*heading, ctx.i18n))
            .size(typography::TITLE_SM)
            .font(bold())
            .into(),
        Block::Paragraph(key) => Text::new(ctx.i18n.tr(key)).size(typography::BODY).into(),
        Block::Code(sample) => {
            let id = ids.next_code();
            code_block::view(id, sample, ctx.state.is_acknowledged(id), ctx.i18n)
                .map(Message::CodeBlock)
        }
        Block::Table(table) => build_table(table, ctx.i18n),
        Block::List(items) => build_list(items, ctx.i18n),
        Block::Callout(callout) => build_callout(callout, ctx.i18n),
        Block::Tabs(tabs) => build_tabs(tabs, ctx, ids),
        Block::Features(features) => build_features(features, ctx.i18n),
        Block::Actions(actions) => build_actions(actions, ctx.i18n),
        Block::Releases(releases) => build_releases(releases, ctx.i18n),
    }
}

fn build_table<'a>(table: &'static Table, i18n: &'a I18n) -> Element<'a, Message> {
    let header = table.headers.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, key| {
            row.push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY)
                    .font(bold())
                    .width(Length::FillPortion(1)),
            )
        },
    );

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(divider());

    for row in table.rows {
        let cells = row.iter().fold(Row::new().spacing(spacing::MD), |cells, cell| {
            let content: Element<'a, Message> = match cell {
                Cell::Literal(value) => Text::new(*value).size(typography::BODY).into(),
                Cell::Code(value) => Text::new(*value)
                    .font(Font::MONOSPACE)
                    .size(typography::CODE)
                    .into(),
                Cell::Key(key) => Text::new(i18n.tr(key)).size(typography::BODY).into(),
            };
            cells.push(Container::new(content).width(Length::FillPortion(1)))
        });
        column = column.push(cells);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_list<'a>(items: &'static [ListItem], i18n: &'a I18n) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, item| {
            let row = Row::new()
                .spacing(spacing::SM)
                .push(Text::new("•").size(typography::BODY));
            let row = match item {
                ListItem::Key(key) => row.push(Text::new(i18n.tr(key)).size(typography::BODY)),
                ListItem::Field { code, key } => row
                    .push(
                        Container::new(
                            Text::new(*code)
                                .font(Font::MONOSPACE)
                                .size(typography::CODE),
                        )
                        .padding([0.0, spacing::XXS])
                        .style(styles::container::badge),
                    )
                    .push(Text::new(i18n.tr(key)).size(typography::BODY)),
            };
            column.push(row)
        })
        .into()
}

fn build_callout<'a>(callout: &'static Callout, i18n: &'a I18n) -> Element<'a, Message> {
    let tone = callout.tone;
    let glyph = match tone {
        Tone::Info => Glyph::Info,
        Tone::Warning | Tone::Danger => Glyph::Alert,
    };

    let mut body = Column::new().spacing(spacing::XS);
    if let Some(title) = callout.title_key {
        body = body.push(Text::new(i18n.tr(title)).size(typography::BODY).font(bold()));
    }
    for key in callout.body_keys {
        body = body.push(Text::new(i18n.tr(key)).size(typography::BODY));
    }
    for key in callout.items {
        body = body.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new("•").size(typography::BODY))
                .push(Text::new(i18n.tr(key)).size(typography::BODY)),
        );
    }

    let icon = icons::sized(
        icons::glyph(glyph).style(move |theme: &Theme, _status| iced::widget::svg::Style {
            color: Some(tone_color(tone, theme)),
        }),
        sizing::ICON_MD,
    );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .push(icon)
            .push(body.width(Length::Fill)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::callout(tone))
    .into()
}

fn tone_color(tone: Tone, theme: &Theme) -> iced::Color {
    let colors = ColorScheme::for_theme(theme);
    match tone {
        Tone::Info => colors.info,
        Tone::Warning => colors.warning,
        Tone::Danger => colors.error,
    }
}

fn build_tabs<'a>(
    tabs: &'static [Tab],
    ctx: &ViewContext<'a>,
    ids: &mut Ids,
) -> Element<'a, Message> {
    let group = ids.next_tabs();
    let selected = ctx.state.selected_tab(group).min(tabs.len().saturating_sub(1));

    let strip = tabs
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XXS), |strip, (index, tab)| {
            strip.push(
                button(Text::new(tab.label).size(typography::BODY))
                    .on_press(Message::SelectTab { group, index })
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::tab(index == selected)),
            )
        });

    let mut column = Column::new().spacing(spacing::MD).push(
        Container::new(strip)
            .padding(spacing::XXS)
            .style(styles::container::tab_list),
    );

    for (index, tab) in tabs.iter().enumerate() {
        if index == selected {
            column = column.push(build_blocks(tab.blocks, ctx, ids));
        } else {
            ids.skip(tab.blocks);
        }
    }

    column.into()
}

fn build_features<'a>(features: &'static [Feature], i18n: &'a I18n) -> Element<'a, Message> {
    features
        .chunks(2)
        .fold(Column::new().spacing(spacing::MD), |column, pair| {
            let mut row = Row::new().spacing(spacing::MD);
            for feature in pair {
                row = row.push(feature_card(feature, i18n));
            }
            if pair.len() == 1 {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            column.push(row)
        })
        .into()
}

fn feature_card<'a>(feature: &'static Feature, i18n: &'a I18n) -> Element<'a, Message> {
    let icon = icons::sized(
        icons::feature(feature.icon, ColorScheme::light().brand_primary),
        sizing::ICON_LG,
    );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(icon)
            .push(
                Text::new(i18n.tr(feature.title_key))
                    .size(typography::TITLE_SM)
                    .font(bold()),
            )
            .push(
                Text::new(i18n.tr(feature.description_key))
                    .size(typography::BODY)
                    .style(muted),
            ),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn build_actions<'a>(actions: &'static [Action], i18n: &'a I18n) -> Element<'a, Message> {
    actions
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, action| {
            let (glyph, message) = match action.target {
                LinkTarget::Route(route) => (Glyph::ArrowRight, Message::Navigate(route)),
                LinkTarget::External(url) => (Glyph::ExternalLink, Message::OpenExternal(url)),
            };
            let icon = if action.primary {
                icons::glyph_colored(glyph, ColorScheme::light().brand_text)
            } else {
                icons::glyph(glyph)
            };

            let content = Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(label(action.label, i18n)).size(typography::BODY))
                .push(icons::sized(icon, sizing::ICON_SM));

            let button = button(content)
                .on_press(message)
                .padding([spacing::SM, spacing::LG]);
            row.push(if action.primary {
                button.style(styles::button::primary)
            } else {
                button.style(styles::button::outline)
            })
        })
        .into()
}

fn build_releases<'a>(releases: &'static [Release], i18n: &'a I18n) -> Element<'a, Message> {
    releases
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, release| {
            let heading = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    Text::new(format!("v{}", release.version))
                        .size(typography::TITLE_SM)
                        .font(bold()),
                )
                .push(
                    Container::new(Text::new(release.date).size(typography::CAPTION))
                        .padding([2.0, spacing::XS])
                        .style(styles::container::badge),
                );

            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::SM)
                        .push(heading)
                        .push(Text::new(i18n.tr(release.notes_key)).size(typography::BODY)),
                )
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
            )
        })
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(Space::new().height(Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(styles::container::divider)
        .into()
}

fn label(label: Label, i18n: &I18n) -> String {
    match label {
        Label::Key(key) => i18n.tr(key),
        Label::Literal(literal) => literal.to_string(),
    }
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}
