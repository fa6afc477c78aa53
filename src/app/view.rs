// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The wizard card fills the window and toasts are stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::wizard as wizard_view;
use crate::wizard::{Presentation, WizardState};
use iced::widget::Stack;
use iced::{Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub wizard: &'a WizardState,
    pub presentation: &'a Presentation,
    pub backdrop: [Color; 4],
    pub phase: f32,
    pub busy: bool,
    pub notifications: &'a Manager,
}

/// Renders the wizard with the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let wizard = wizard_view::view(wizard_view::ViewContext {
        i18n: ctx.i18n,
        state: ctx.wizard,
        presentation: ctx.presentation,
        backdrop: ctx.backdrop,
        phase: ctx.phase,
        busy: ctx.busy,
    })
    .map(Message::Wizard);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(wizard)
        .push(toasts)
        .into()
}
