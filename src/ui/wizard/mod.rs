// SPDX-License-Identifier: MPL-2.0
//! Step renderer for the photo uploader wizard.
//!
//! Rendering is a pure function of [`ViewContext`]: it reads the wizard state
//! and never mutates it. User intent is reported through [`Message`] and
//! applied by the application's update loop.

pub mod backdrop;
mod done;
mod review;
mod select;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::wizard::{Presentation, QualityTag, Step, WizardState};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Number of steps shown by the step indicator.
const STEP_COUNT: u8 = 3;

/// User intents raised by the wizard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A quality toggle was pressed.
    Quality(QualityTag),
    /// "Upload Photo" or the drop zone was pressed.
    Browse,
    /// "Take Photo" was pressed.
    Camera,
    /// The footer upload button was pressed.
    Upload,
    /// "Change Photo" or "Upload Another Photo" was pressed.
    Reset,
}

/// Everything the card needs to render one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a WizardState,
    pub presentation: &'a Presentation,
    /// Gradient stops currently painted behind the card.
    pub backdrop: [Color; 4],
    /// Position within the backdrop animation cycle.
    pub phase: f32,
    /// A picker is open or a picked file is being read.
    pub busy: bool,
}

/// Renders the backdrop with the wizard card centered on it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let stops = ctx.backdrop;
    let phase = ctx.phase;

    Container::new(card(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .style(move |_theme: &Theme| backdrop::style(stops, phase))
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(header(ctx));

    if let Some(error) = state.error() {
        content = content.push(error_alert(i18n, error.i18n_key()));
    }

    let body = match state.step() {
        Step::Select => select::view(ctx),
        Step::Review => review::view(ctx),
        Step::Done => done::view(ctx),
    };
    content = content.push(body);

    if let Some(footer) = footer(ctx) {
        content = content.push(footer);
    }

    Container::new(content)
        .width(Length::Fixed(ctx.presentation.card_width))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let current = ctx.state.step().number().to_string();
    let total = STEP_COUNT.to_string();

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(ctx.presentation.title_key(ctx.state))).size(typography::TITLE_MD))
        .push(secondary_text(
            i18n.tr(ctx.presentation.description_key),
            typography::BODY,
        ))
        .push(secondary_text(
            i18n.tr_with_args("step-indicator", &[("current", &current), ("total", &total)]),
            typography::CAPTION,
        ))
        .into()
}

fn error_alert<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("error-title")).size(typography::BODY))
        .push(Text::new(i18n.tr(key)).size(typography::BODY_SM));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::alert_circle(), sizing::ICON_SM),
            palette::ERROR_500,
        ))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::alert)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let action = footer_action(ctx.state)?;

    let footer_button = button(Text::new(ctx.i18n.tr(action.label_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .on_press_maybe(action.on_press);

    Some(Row::new().push(footer_button).into())
}

/// Footer button for the current step; `on_press` is `None` when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FooterAction {
    label_key: &'static str,
    on_press: Option<Message>,
}

fn footer_action(state: &WizardState) -> Option<FooterAction> {
    match state.step() {
        Step::Select => None,
        Step::Review => Some(FooterAction {
            label_key: if state.is_uploading() {
                "footer-uploading"
            } else {
                "footer-upload-button"
            },
            on_press: state.can_upload().then_some(Message::Upload),
        }),
        Step::Done => Some(FooterAction {
            label_key: "footer-upload-another-button",
            on_press: Some(Message::Reset),
        }),
    }
}

/// The two quality toggles, shared by the Select and Review steps.
pub(crate) fn quality_toggles<'a>(
    i18n: &I18n,
    selected: Option<QualityTag>,
    enabled: bool,
) -> Element<'a, Message> {
    let toggle = |tag: QualityTag| {
        let icon = match tag {
            QualityTag::Good => icons::thumbs_up(),
            QualityTag::Bad => icons::thumbs_down(),
        };
        let is_selected = selected == Some(tag);
        let icon_color = if is_selected {
            Color::WHITE
        } else {
            palette::GRAY_900
        };
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(icons::sized(icon, sizing::ICON_MD), icon_color))
            .push(Text::new(i18n.tr(tag.i18n_key())).size(typography::BODY));

        button(content)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::quality(tag, is_selected))
            .on_press_maybe(enabled.then_some(Message::Quality(tag)))
    };

    Row::new()
        .spacing(spacing::MD)
        .push(toggle(QualityTag::Good))
        .push(toggle(QualityTag::Bad))
        .into()
}

/// "Photo Quality: <tag>" line shown on Review and Done.
pub(crate) fn quality_line<'a>(i18n: &I18n, quality: QualityTag) -> Element<'a, Message> {
    let label = i18n.tr(quality.i18n_key());
    secondary_text(
        i18n.tr_with_args("review-quality", &[("quality", &label)]),
        typography::BODY_SM,
    )
}

pub(crate) fn secondary_text<'a>(content: String, size: f32) -> Element<'a, Message> {
    Text::new(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{FileCandidate, UploadReceipt, Variant};
    use std::time::Duration;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn render(state: &WizardState, variant: Variant, busy: bool) {
        let i18n = I18n::default();
        let presentation = variant.presentation();
        let _element = view(ViewContext {
            i18n: &i18n,
            state,
            presentation: &presentation,
            backdrop: [Color::BLACK; 4],
            phase: 0.25,
            busy,
        });
    }

    fn reviewed(name: &str, quality: Option<QualityTag>) -> WizardState {
        let mut state = WizardState::new();
        state
            .select(FileCandidate::from_bytes(name, PNG_HEADER.to_vec()))
            .expect("png accepted");
        if let Some(quality) = quality {
            state.set_quality(quality);
        }
        state
    }

    fn finished(quality: QualityTag) -> WizardState {
        let mut state = reviewed("photo.png", Some(quality));
        let request = state.begin_upload().expect("upload starts");
        let receipt = UploadReceipt {
            ticket: request.ticket,
            file_name: request.file_name,
            quality: request.quality,
            elapsed: Duration::ZERO,
        };
        assert!(state.finish_upload(&receipt));
        state
    }

    #[test]
    fn select_has_no_footer() {
        assert_eq!(footer_action(&WizardState::new()), None);
    }

    #[test]
    fn upload_button_disabled_until_rated() {
        let action = footer_action(&reviewed("photo.png", None)).expect("review footer");
        assert_eq!(action.label_key, "footer-upload-button");
        assert_eq!(action.on_press, None);
    }

    #[test]
    fn upload_button_enabled_once_rated() {
        let action =
            footer_action(&reviewed("photo.png", Some(QualityTag::Good))).expect("review footer");
        assert_eq!(action.label_key, "footer-upload-button");
        assert_eq!(action.on_press, Some(Message::Upload));
    }

    #[test]
    fn upload_button_disabled_while_uploading() {
        let mut state = reviewed("photo.png", Some(QualityTag::Bad));
        assert!(state.begin_upload().is_some());

        let action = footer_action(&state).expect("review footer");
        assert_eq!(action.label_key, "footer-uploading");
        assert_eq!(action.on_press, None);
    }

    #[test]
    fn done_footer_resets() {
        let action = footer_action(&finished(QualityTag::Good)).expect("done footer");
        assert_eq!(action.label_key, "footer-upload-another-button");
        assert_eq!(action.on_press, Some(Message::Reset));
    }

    #[test]
    fn every_step_renders_for_both_variants() {
        let mut with_error = WizardState::new();
        let _ = with_error.select(FileCandidate::from_bytes("notes.txt", b"hello".to_vec()));
        assert!(with_error.error().is_some());

        let states = [
            WizardState::new(),
            with_error,
            reviewed("photo.png", None),
            reviewed("photo.png", Some(QualityTag::Bad)),
            finished(QualityTag::Good),
        ];
        for state in &states {
            for variant in Variant::ALL {
                render(state, variant, false);
                render(state, variant, true);
            }
        }
    }

    #[test]
    fn step_indicator_counts_three_steps() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args(
            "step-indicator",
            &[("current", "2"), ("total", &STEP_COUNT.to_string())],
        );
        assert!(text.contains('2'));
        assert!(text.contains('3'));
    }
}
