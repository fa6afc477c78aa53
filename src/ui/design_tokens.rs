// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Backdrop**: Gradient stops behind the wizard card
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use photo_uploader::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4b5563
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.859); // #d1d5db
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #e5e7eb
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.98, 0.984); // #f9fafb

    // Action colors
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.51, 0.965); // #3b82f6
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563eb
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969); // #a855f7
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.2, 0.918); // #9333ea

    // Quality toggles
    pub const GREEN_100: Color = Color::from_rgb(0.863, 0.988, 0.906); // #dcfce7
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369); // #22c55e
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.29); // #16a34a
    pub const RED_100: Color = Color::from_rgb(0.996, 0.886, 0.886); // #fee2e2
    pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Backdrop Gradients
// ============================================================================

pub mod backdrop {
    use super::Color;

    /// Stops used before a quality is chosen.
    pub const DEFAULT: [Color; 4] = [
        Color::from_rgb8(0xee, 0x77, 0x52),
        Color::from_rgb8(0xe7, 0x3c, 0x7e),
        Color::from_rgb8(0x23, 0xa6, 0xd5),
        Color::from_rgb8(0x23, 0xd5, 0xab),
    ];

    /// Stops for a photo tagged good.
    pub const GOOD: [Color; 4] = [
        Color::from_rgb8(0x7c, 0xff, 0xcb),
        Color::from_rgb8(0x74, 0xf2, 0xce),
        Color::from_rgb8(0x63, 0xe6, 0xbe),
        Color::from_rgb8(0x48, 0xc9, 0xb0),
    ];

    /// Stops for a photo tagged bad.
    pub const BAD: [Color; 4] = [
        Color::from_rgb8(0xff, 0xcc, 0xcb),
        Color::from_rgb8(0xff, 0xa8, 0xa8),
        Color::from_rgb8(0xff, 0x85, 0x85),
        Color::from_rgb8(0xff, 0x6b, 0x6b),
    ];

    /// Base angle of the gradient (-45deg in CSS terms).
    pub const BASE_ANGLE_DEGREES: f32 = 135.0;

    /// How far the angle swings during one animation cycle.
    pub const SWING_DEGREES: f32 = 30.0;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card surface over the animated backdrop.
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Done badge (circle around the check icon)
    pub const BADGE: f32 = 64.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Review preview (16:9 of the default card content width)
    pub const PREVIEW_HEIGHT: f32 = 198.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card title
    pub const TITLE_MD: f32 = 22.0;

    /// Completion heading
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Step indicator
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop zone, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.25,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::BADGE > sizing::ICON_LG);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn backdrop_sets_are_distinct() {
        assert_ne!(backdrop::DEFAULT, backdrop::GOOD);
        assert_ne!(backdrop::GOOD, backdrop::BAD);
        // Good leans green, bad leans red.
        assert!(backdrop::GOOD[0].g > backdrop::GOOD[0].r);
        assert!(backdrop::BAD[3].r > backdrop::BAD[3].g);
    }
}
