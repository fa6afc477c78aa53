// SPDX-License-Identifier: MPL-2.0
//! Select step: quality toggles, acquisition triggers and the drop zone.

use super::{quality_toggles, secondary_text, Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::wizard::{Presentation, QualityTag};
use iced::widget::{button, Column, Container, Row, Svg, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let quality = ctx.state.quality();

    let toggles = Container::new(quality_toggles(i18n, quality, true))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut content = Column::new().spacing(spacing::MD).push(toggles);

    let (browse, camera) = match acquisition(ctx.presentation, quality, ctx.busy) {
        Acquisition::RateFirst => {
            return content
                .push(
                    Container::new(secondary_text(
                        i18n.tr("select-rate-first-hint"),
                        typography::BODY_SM,
                    ))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
                )
                .into();
        }
        Acquisition::Controls { browse, camera } => (browse, camera),
    };

    let triggers = Row::new()
        .spacing(spacing::MD)
        .push(trigger(
            icons::upload(),
            i18n.tr("select-upload-button"),
            styles::button::primary,
            browse,
        ))
        .push(trigger(
            icons::camera(),
            i18n.tr("select-camera-button"),
            styles::button::capture,
            camera,
        ));

    let drop_zone_content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::tinted(
            icons::sized(icons::upload(), sizing::ICON_XL),
            palette::GRAY_400,
        ))
        .push(secondary_text(i18n.tr("select-drop-hint"), typography::BODY_SM));

    let drop_zone = button(
        Container::new(drop_zone_content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::button::drop_zone)
    .on_press_maybe(browse);

    content = content
        .push(
            Container::new(triggers)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(drop_zone);

    content.into()
}

/// What the step shows below the quality toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Acquisition {
    /// Acquisition is gated on a rating; a hint replaces the controls.
    RateFirst,
    /// Upload and Take Photo triggers plus the drop zone. Presses are `None`
    /// while a picker is open or a pick is being read.
    Controls {
        browse: Option<Message>,
        camera: Option<Message>,
    },
}

fn acquisition(presentation: &Presentation, quality: Option<QualityTag>, busy: bool) -> Acquisition {
    if !presentation.shows_acquisition(quality) {
        return Acquisition::RateFirst;
    }
    Acquisition::Controls {
        browse: (!busy).then_some(Message::Browse),
        camera: (!busy).then_some(Message::Camera),
    }
}

fn trigger<'a>(
    icon: Svg<'static>,
    label: String,
    style: fn(&Theme, button::Status) -> button::Style,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icons::sized(icon, sizing::ICON_MD), Color::WHITE))
        .push(Text::new(label).size(typography::BODY));

    button(content)
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .on_press_maybe(on_press)
        .into()
}
