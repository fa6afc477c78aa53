// SPDX-License-Identifier: MPL-2.0
//! Review step: preview, file name, "Change Photo" and the quality line.

use super::{quality_line, quality_toggles, secondary_text, Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::wizard::PreviewSource;
use iced::widget::{button, Column, Container, Image, Row, Svg, Text};
use iced::{alignment, ContentFit, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let preview: Element<'a, Message> = match state.preview().map(|p| p.source()) {
        Some(PreviewSource::Raster(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(PreviewSource::Vector(handle)) => Svg::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => secondary_text(i18n.tr("review-no-preview"), typography::BODY_SM),
    };

    let preview_frame = Container::new(preview)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::preview_frame);

    let file_name = state
        .file()
        .map(|file| file.name().to_string())
        .unwrap_or_default();

    let change_button = button(Text::new(i18n.tr("review-change-button")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::outline)
        .on_press_maybe((!state.is_uploading()).then_some(Message::Reset));

    let file_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(secondary_text(file_name, typography::BODY_SM)).width(Length::Fill),
        )
        .push(change_button);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(preview_frame)
        .push(file_row);

    content = match state.quality() {
        Some(quality) => content.push(quality_line(i18n, quality)),
        // Reached only when the photo was picked before rating it.
        None => content
            .push(quality_toggles(i18n, None, !state.is_uploading()))
            .push(secondary_text(i18n.tr("review-rate-hint"), typography::BODY_SM)),
    };

    content.into()
}
