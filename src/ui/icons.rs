// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small stroke SVGs embedded as string constants. Handles are
//! cached using `OnceLock`, and every icon is drawn in black so it can be
//! recolored with [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `thumbs_up` not `mark_good`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps stroke paths in a 24x24 SVG document.
macro_rules! svg_document {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE
                .get_or_init(|| Handle::from_memory(svg_document!($body).as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Acquisition
// =============================================================================

define_icon!(
    upload,
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" y1="3" x2="12" y2="15"/>"#,
    "Upload icon: arrow rising out of a tray."
);
define_icon!(
    camera,
    r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/><circle cx="12" cy="13" r="3"/>"#,
    "Camera icon: camera body with lens."
);

// =============================================================================
// Quality
// =============================================================================

define_icon!(
    thumbs_up,
    r#"<path d="M7 10v12"/><path d="M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z"/>"#,
    "Thumbs up icon."
);
define_icon!(
    thumbs_down,
    r#"<path d="M17 14V2"/><path d="M9 18.12 10 14H4.17a2 2 0 0 1-1.92-2.56l2.33-8A2 2 0 0 1 6.5 2H20a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2h-2.76a2 2 0 0 0-1.79 1.11L12 22a3.13 3.13 0 0 1-3-3.88Z"/>"#,
    "Thumbs down icon."
);

// =============================================================================
// Status
// =============================================================================

define_icon!(
    check,
    r#"<polyline points="20 6 9 17 4 12"/>"#,
    "Check icon: single tick."
);
define_icon!(
    alert_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/>"#,
    "Alert icon: exclamation mark in a circle."
);
define_icon!(
    warning,
    r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#,
    "Warning icon: exclamation mark in a triangle."
);
define_icon!(
    cross,
    r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
    "Cross icon: dismiss."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_are_well_formed() {
        let doc = svg_document!(r#"<polyline points="20 6 9 17 4 12"/>"#);
        assert!(doc.starts_with("<svg "));
        assert!(doc.ends_with("</svg>"));
        assert!(doc.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn icons_can_be_built_and_sized() {
        for icon in [
            upload(),
            camera(),
            thumbs_up(),
            thumbs_down(),
            check(),
            alert_circle(),
            warning(),
            cross(),
        ] {
            let _ = tinted(sized(icon, 20.0), Color::WHITE);
        }
    }
}
