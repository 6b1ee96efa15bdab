// SPDX-License-Identifier: MPL-2.0
//! Documentation pages as static data.
//!
//! Pages carry translation keys, never translated text. Code samples, file
//! names and table literals are the same in every language and are stored
//! verbatim. Rendering lives in [`crate::ui::page`].

mod pages;

use crate::navigation::Route;

/// Text that is either looked up or shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Key(&'static str),
    Literal(&'static str),
}

impl Label {
    fn key(self) -> Option<&'static str> {
        match self {
            Label::Key(key) => Some(key),
            Label::Literal(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub route: Route,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub sections: &'static [Section],
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Anchor id, stable across languages.
    pub id: &'static str,
    pub heading: Option<Label>,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Subheading(Label),
    Paragraph(&'static str),
    Code(CodeSample),
    Table(Table),
    List(&'static [ListItem]),
    Callout(Callout),
    Tabs(&'static [Tab]),
    Features(&'static [Feature]),
    Actions(&'static [Action]),
    Releases(&'static [Release]),
}

/// A copyable code sample.
#[derive(Debug, Clone, Copy)]
pub struct CodeSample {
    pub code: &'static str,
    pub language: Option<&'static str>,
    pub title: Option<Label>,
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    /// Header translation keys.
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [Cell]],
}

#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Literal(&'static str),
    Code(&'static str),
    Key(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum ListItem {
    Key(&'static str),
    /// `code`: translated description.
    Field {
        code: &'static str,
        key: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy)]
pub struct Callout {
    pub tone: Tone,
    pub title_key: Option<&'static str>,
    pub body_keys: &'static [&'static str],
    pub items: &'static [&'static str],
}

/// One tab of a tab group. Labels are platform names and not translated.
#[derive(Debug, Clone, Copy)]
pub struct Tab {
    pub label: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Routing,
    Shield,
    Zap,
    Refresh,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Route(Route),
    External(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Action {
    pub label: Label,
    pub target: LinkTarget,
    pub primary: bool,
}

/// A changelog entry.
#[derive(Debug, Clone, Copy)]
pub struct Release {
    pub version: &'static str,
    pub date: &'static str,
    pub notes_key: &'static str,
}

/// Page shown for `route`.
#[must_use]
pub fn page_for(route: Route) -> &'static Page {
    match route {
        Route::Home => &pages::HOME,
        Route::Installation => &pages::INSTALLATION,
        Route::Configuration => &pages::CONFIGURATION,
        Route::Usage => &pages::USAGE,
        Route::Providers => &pages::PROVIDERS,
        Route::Service => &pages::SERVICE,
        Route::Troubleshooting => &pages::TROUBLESHOOTING,
        Route::Changelog => &pages::CHANGELOG,
    }
}

/// Translation keys of the not-found page.
pub const NOT_FOUND_TITLE_KEY: &str = "notFound.title";
pub const NOT_FOUND_DESCRIPTION_KEY: &str = "notFound.description";
pub const NOT_FOUND_BACK_KEY: &str = "notFound.back";

/// Every translation key the pages use, in page order, without duplicates.
#[must_use]
pub fn all_keys() -> Vec<&'static str> {
    let mut keys = Vec::new();
    for route in Route::ALL {
        let page = page_for(route);
        keys.push(page.title_key);
        keys.push(page.description_key);
        for section in page.sections {
            keys.extend(section.heading.and_then(Label::key));
            collect_block_keys(section.blocks, &mut keys);
        }
    }
    keys.extend([
        NOT_FOUND_TITLE_KEY,
        NOT_FOUND_DESCRIPTION_KEY,
        NOT_FOUND_BACK_KEY,
    ]);

    let mut seen = std::collections::HashSet::new();
    keys.retain(|key| seen.insert(*key));
    keys
}

fn collect_block_keys(blocks: &[Block], keys: &mut Vec<&'static str>) {
    for block in blocks {
        match block {
            Block::Subheading(label) => keys.extend(label.key()),
            Block::Paragraph(key) => keys.push(*key),
            Block::Code(sample) => keys.extend(sample.title.and_then(Label::key)),
            Block::Table(table) => {
                keys.extend(table.headers.iter().copied());
                for row in table.rows {
                    keys.extend(row.iter().filter_map(|cell| match cell {
                        Cell::Key(key) => Some(*key),
                        Cell::Literal(_) | Cell::Code(_) => None,
                    }));
                }
            }
            Block::List(items) => keys.extend(items.iter().map(|item| match item {
                ListItem::Key(key) | ListItem::Field { key, .. } => *key,
            })),
            Block::Callout(callout) => {
                keys.extend(callout.title_key);
                keys.extend(callout.body_keys.iter().copied());
                keys.extend(callout.items.iter().copied());
            }
            Block::Tabs(tabs) => {
                for tab in *tabs {
                    collect_block_keys(tab.blocks, keys);
                }
            }
            Block::Features(features) => {
                for feature in *features {
                    keys.push(feature.title_key);
                    keys.push(feature.description_key);
                }
            }
            Block::Actions(actions) => keys.extend(actions.iter().filter_map(|a| a.label.key())),
            Block::Releases(releases) => keys.extend(releases.iter().map(|r| r.notes_key)),
        }
    }
}

/// Number of code samples in `blocks`, including those inside every tab.
#[must_use]
pub fn code_sample_count(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block {
            Block::Code(_) => 1,
            Block::Tabs(tabs) => tabs.iter().map(|tab| code_sample_count(tab.blocks)).sum(),
            _ => 0,
        })
        .sum()
}
