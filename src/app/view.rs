// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the page for the current location, frames it with the shell and
//! layers the toasts on top.

use super::Message;
use crate::content;
use crate::i18n::I18n;
use crate::navigation::Router;
use crate::ui::notifications::{self, Toast};
use crate::ui::page::{self, PageState};
use crate::ui::shell::{self, ShellState};
use iced::widget::Stack;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub router: &'a Router,
    pub is_dark: bool,
    pub shell: &'a ShellState,
    pub page: &'a PageState,
    pub notifications: &'a notifications::Manager,
}

/// Renders the shell, the current page and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_view = match ctx.router.active_route() {
        Some(route) => page::view(
            content::page_for(route),
            page::ViewContext {
                i18n: ctx.i18n,
                state: ctx.page,
            },
        ),
        None => page::view_not_found(ctx.i18n),
    };

    let framed = shell::view(
        shell::ViewContext {
            i18n: ctx.i18n,
            location: ctx.router.location(),
            is_dark: ctx.is_dark,
            state: ctx.shell,
        },
        page_view.map(shell::Message::Page),
    )
    .map(Message::Shell);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(framed).push(toasts).into()
}
