// SPDX-License-Identifier: MPL-2.0
//! Done step: completion badge and summary.

use super::{quality_line, secondary_text, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badge = Container::new(icons::tinted(
        icons::sized(icons::check(), sizing::ICON_LG),
        palette::GREEN_600,
    ))
    .width(Length::Fixed(sizing::BADGE))
    .height(Length::Fixed(sizing::BADGE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::success_badge);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(badge)
        .push(Text::new(i18n.tr("done-heading")).size(typography::TITLE_SM))
        .push(secondary_text(i18n.tr("done-message"), typography::BODY_SM));

    if let Some(quality) = ctx.state.quality() {
        content = content.push(quality_line(i18n, quality));
    }

    content.into()
}
