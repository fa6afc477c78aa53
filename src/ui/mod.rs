// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: views read state
//! and report intent through messages handled by the application.
//!
//! - [`wizard`] - The wizard card and its animated backdrop
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod wizard;
