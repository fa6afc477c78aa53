// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

/// Wizard card surface over the backdrop.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Destructive inline alert (invalid file type).
pub fn alert(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.error
        })),
        text_color: Some(colors.error),
        border: Border {
            color: colors.error,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Round badge behind the completion check.
pub fn success_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GREEN_100)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded frame clipping the review preview.
pub fn preview_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window linear gradient through `stops`, evenly spaced except for the
/// inner stops which move by `drift` (a fraction of the gradient length).
pub fn backdrop(stops: [Color; 4], angle: Degrees, drift: f32) -> container::Style {
    let last = (stops.len() - 1) as f32;
    let gradient = stops
        .iter()
        .enumerate()
        .fold(Linear::new(angle), |linear, (index, color)| {
            let base = index as f32 / last;
            let offset = if index == 0 || index == stops.len() - 1 {
                base
            } else {
                (base + drift).clamp(0.0, 1.0)
            };
            linear.add_stop(offset, *color)
        });

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::backdrop as stops;

    #[test]
    fn card_is_translucent_and_rounded() {
        let style = card(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("expected a solid card background"),
        }
        assert!(style.border.radius.top_left > 0.0);
    }

    #[test]
    fn alert_uses_error_color() {
        let style = alert(&Theme::Light);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.text_color, Some(palette::ERROR_500));
    }

    #[test]
    fn backdrop_is_a_gradient() {
        let style = backdrop(stops::GOOD, Degrees(135.0), 0.05);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }
}
