// SPDX-License-Identifier: MPL-2.0
//! Copyable code samples.
//!
//! Each rendered sample has a two-state acknowledgment:
//!
//! ```text
//! Idle ──copy ok──▶ Acknowledged ──2000 ms──▶ Idle
//!                        │  ▲
//!                        └──┘ copy ok (restarts the window)
//! ```
//!
//! The reset is an abortable [`Task`]. A new copy aborts the pending reset
//! and schedules a fresh one; every reset carries a generation number, so a
//! reset that still arrives after being superseded is ignored.

use crate::config::COPY_ACK_WINDOW_MS;
use crate::content::{CodeSample, Label};
use crate::error::Result;
use crate::i18n::I18n;
use crate::platform::ClipboardWriter;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::task;
use iced::widget::{
    button, container, scrollable, text, tooltip, Column, Container, Row, Space, Stack,
};
use iced::{Element, Font, Length, Task, Theme};
use std::collections::HashMap;
use std::time::Duration;

/// Position of a sample on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeBlockId(pub usize);

#[derive(Debug, Clone)]
pub enum Message {
    Copy {
        block: CodeBlockId,
        code: &'static str,
    },
    AcknowledgmentExpired {
        block: CodeBlockId,
        generation: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Acknowledged {
        generation: u64,
    },
}

struct PendingReset {
    generation: u64,
    handle: task::Handle,
}

impl std::fmt::Debug for PendingReset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingReset")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// Acknowledgment state of every sample on the current page.
#[derive(Debug, Default)]
pub struct CopyTracker {
    pending: HashMap<CodeBlockId, PendingReset>,
    next_generation: u64,
}

impl CopyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn feedback(&self, block: CodeBlockId) -> CopyFeedback {
        self.pending
            .get(&block)
            .map_or(CopyFeedback::Idle, |pending| CopyFeedback::Acknowledged {
                generation: pending.generation,
            })
    }

    #[must_use]
    pub fn is_acknowledged(&self, block: CodeBlockId) -> bool {
        self.pending.contains_key(&block)
    }

    /// Writes the trimmed sample to the clipboard and acknowledges it.
    ///
    /// Returns the task that ends the acknowledgment window.
    ///
    /// # Errors
    ///
    /// Returns the clipboard error; the block's state is left unchanged.
    pub fn copy(
        &mut self,
        block: CodeBlockId,
        sample: &str,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Result<Task<Message>> {
        clipboard.write_text(copy_text(sample))?;

        self.next_generation += 1;
        let generation = self.next_generation;

        let (reset, handle) =
            Task::perform(acknowledgment_window(block, generation), std::convert::identity)
                .abortable();

        if let Some(previous) = self
            .pending
            .insert(block, PendingReset { generation, handle })
        {
            previous.handle.abort();
        }
        tracing::debug!(block = block.0, generation, "copied code sample");

        Ok(reset)
    }

    /// Ends the acknowledgment if `generation` is still the current one.
    ///
    /// Returns `true` if the block went back to idle.
    pub fn expire(&mut self, block: CodeBlockId, generation: u64) -> bool {
        match self.pending.get(&block) {
            Some(pending) if pending.generation == generation => {
                self.pending.remove(&block);
                true
            }
            _ => false,
        }
    }

    /// Drops every acknowledgment and aborts the pending resets.
    pub fn clear(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.handle.abort();
        }
    }
}

/// Text placed on the clipboard: the sample without surrounding whitespace.
#[must_use]
pub fn copy_text(sample: &str) -> &str {
    sample.trim()
}

/// Resolves after the acknowledgment window with the matching expiry message.
pub async fn acknowledgment_window(block: CodeBlockId, generation: u64) -> Message {
    tokio::time::sleep(Duration::from_millis(COPY_ACK_WINDOW_MS)).await;
    Message::AcknowledgmentExpired { block, generation }
}

/// Renders a sample with its optional title bar and the copy button.
pub fn view<'a>(
    block: CodeBlockId,
    sample: &'a CodeSample,
    acknowledged: bool,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut frame = Column::new();

    if let Some(title) = sample.title {
        let title = match title {
            Label::Key(key) => i18n.tr(key),
            Label::Literal(literal) => literal.to_string(),
        };
        let mut bar = Row::new()
            .align_y(Vertical::Center)
            .push(text(title).size(typography::BODY))
            .push(Space::new().width(Length::Fill));
        if let Some(language) = sample.language {
            bar = bar.push(
                container(text(language).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge),
            );
        }
        frame = frame.push(
            Container::new(bar)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::code_title),
        );
    }

    let code = scrollable(
        Container::new(
            text(copy_text(sample.code))
                .font(Font::MONOSPACE)
                .size(typography::CODE),
        )
        .padding(spacing::MD),
    )
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::default(),
    ))
    .width(Length::Fill);

    let copy_button = Container::new(copy_button(block, sample.code, acknowledged, i18n))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::XS);

    frame = frame.push(Stack::new().push(code).push(copy_button));

    Container::new(frame)
        .width(Length::Fill)
        .style(styles::container::code_block)
        .into()
}

fn copy_button<'a>(
    block: CodeBlockId,
    code: &'static str,
    acknowledged: bool,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let (icon, label) = if acknowledged {
        (
            icons::glyph_colored(Glyph::Check, ColorScheme::light().success),
            i18n.tr("codeBlock.copied"),
        )
    } else {
        (icons::glyph(Glyph::Copy), i18n.tr("codeBlock.copy"))
    };

    let button = button(icons::sized(icon, sizing::ICON_SM))
        .on_press(Message::Copy { block, code })
        .padding(spacing::XS)
        .style(|theme: &Theme, status| {
            let mut style = styles::button::outline(theme, status);
            if style.background.is_none() {
                style.background = Some(ColorScheme::for_theme(theme).surface_primary.into());
            }
            style
        });

    tooltip::Tooltip::new(button, text(label).size(typography::CAPTION), tooltip::Position::Left)
        .gap(spacing::XXS)
        .padding(spacing::XS)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("denied".into()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    const BLOCK: CodeBlockId = CodeBlockId(0);

    #[test]
    fn copy_trims_surrounding_whitespace_only() {
        let mut tracker = CopyTracker::new();
        let mut clipboard = RecordingClipboard::default();

        let _ = tracker
            .copy(BLOCK, "\n  summon --config a.yaml  \n\n", &mut clipboard)
            .expect("copy");

        assert_eq!(clipboard.written, ["summon --config a.yaml"]);
    }

    #[test]
    fn successful_copy_acknowledges_immediately() {
        let mut tracker = CopyTracker::new();
        assert_eq!(tracker.feedback(BLOCK), CopyFeedback::Idle);

        let _ = tracker
            .copy(BLOCK, "summon", &mut RecordingClipboard::default())
            .expect("copy");

        assert!(matches!(
            tracker.feedback(BLOCK),
            CopyFeedback::Acknowledged { .. }
        ));
    }

    #[test]
    fn failed_copy_leaves_block_idle() {
        let mut tracker = CopyTracker::new();
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };

        let result = tracker.copy(BLOCK, "summon", &mut clipboard);

        assert!(matches!(result, Err(Error::Clipboard(_))));
        assert_eq!(tracker.feedback(BLOCK), CopyFeedback::Idle);
    }

    #[test]
    fn recopy_supersedes_the_pending_reset() {
        let mut tracker = CopyTracker::new();
        let mut clipboard = RecordingClipboard::default();

        let _ = tracker.copy(BLOCK, "a", &mut clipboard).expect("copy");
        let CopyFeedback::Acknowledged { generation: first } = tracker.feedback(BLOCK) else {
            panic!("expected acknowledgment");
        };
        let _ = tracker.copy(BLOCK, "a", &mut clipboard).expect("copy");

        // The first window's reset arrives late and must not end the second.
        assert!(!tracker.expire(BLOCK, first));
        assert!(tracker.is_acknowledged(BLOCK));

        let CopyFeedback::Acknowledged { generation: second } = tracker.feedback(BLOCK) else {
            panic!("expected acknowledgment");
        };
        assert!(tracker.expire(BLOCK, second));
        assert_eq!(tracker.feedback(BLOCK), CopyFeedback::Idle);
    }

    #[test]
    fn blocks_are_tracked_independently() {
        let mut tracker = CopyTracker::new();
        let mut clipboard = RecordingClipboard::default();

        let _ = tracker.copy(CodeBlockId(1), "a", &mut clipboard).expect("copy");
        assert!(tracker.is_acknowledged(CodeBlockId(1)));
        assert!(!tracker.is_acknowledged(CodeBlockId(2)));
    }

    #[test]
    fn clear_returns_every_block_to_idle() {
        let mut tracker = CopyTracker::new();
        let mut clipboard = RecordingClipboard::default();
        let _ = tracker.copy(CodeBlockId(1), "a", &mut clipboard).expect("copy");
        let _ = tracker.copy(CodeBlockId(2), "b", &mut clipboard).expect("copy");

        tracker.clear();

        assert!(!tracker.is_acknowledged(CodeBlockId(1)));
        assert!(!tracker.is_acknowledged(CodeBlockId(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledgment_window_lasts_exactly_two_seconds() {
        let start = tokio::time::Instant::now();

        let message = acknowledgment_window(BLOCK, 7).await;

        assert_eq!(start.elapsed(), Duration::from_millis(2000));
        assert!(matches!(
            message,
            Message::AcknowledgmentExpired {
                block: BLOCK,
                generation: 7
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledgment_window_is_pending_just_before_expiry() {
        let window = acknowledgment_window(BLOCK, 1);
        let early = tokio::time::timeout(Duration::from_millis(1999), window).await;
        assert!(early.is_err());
    }
}
