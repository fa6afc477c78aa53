// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use crate::wizard::QualityTag;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid action button in `base`, darkening to `hover`.
fn filled(base: Color, hover: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: hover,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Main action: "Upload Photo" trigger and the footer buttons.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::BLUE_500, palette::BLUE_600, status)
}

/// "Take Photo" trigger.
pub fn capture(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PURPLE_500, palette::PURPLE_600, status)
}

/// Quality toggle. Selected toggles fill with the tag's color; the other one
/// stays neutral and tints on hover.
pub fn quality(
    tag: QualityTag,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (accent, tint) = match tag {
            QualityTag::Good => (palette::GREEN_500, palette::GREEN_100),
            QualityTag::Bad => (palette::RED_500, palette::RED_100),
        };

        if selected {
            return button::Style {
                background: Some(Background::Color(accent)),
                text_color: WHITE,
                border: Border {
                    color: accent,
                    width: border::WIDTH_SM,
                    radius: radius::MD.into(),
                },
                shadow: shadow::MD,
                snap: true,
            };
        }

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => tint,
            _ => palette::GRAY_200,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_900,
            border: Border {
                color: Color::TRANSPARENT,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Outlined secondary action ("Change Photo").
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.surface_secondary,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: colors.outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable drop zone. Iced has no dashed strokes, so the zone uses a
/// thicker outline that darkens on hover.
pub fn drop_zone(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, outline) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (colors.surface_secondary, palette::GRAY_400)
        }
        _ => (Color::TRANSPARENT, colors.outline),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            color: outline,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
