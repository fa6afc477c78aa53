// SPDX-License-Identifier: MPL-2.0
//! Widget styles shared by the wizard and toasts.

pub mod button;
pub mod container;
