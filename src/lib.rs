// SPDX-License-Identifier: MPL-2.0
//! `photo_uploader` is a step-by-step photo upload wizard built with the Iced
//! GUI framework.
//!
//! The user picks or drops an image, rates it good or bad, and submits it to a
//! simulated upload. The wizard state machine lives in [`wizard`] and is
//! independent of the UI; [`ui`] renders it and [`app`] wires it to pickers,
//! drag-and-drop, localization and persisted preferences.

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod wizard;
