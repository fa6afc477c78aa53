// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Simulated upload delay and its bounds
//! - **Backdrop**: Gradient animation timing
//! - **Notifications**: Auto-dismiss polling

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Delay of the simulated upload, in milliseconds.
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;

/// Minimum simulated upload delay.
pub const MIN_UPLOAD_DELAY_MS: u64 = 0;

/// Maximum simulated upload delay (one minute).
pub const MAX_UPLOAD_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// Duration of one full gradient animation cycle, in seconds.
pub const BACKDROP_CYCLE_SECS: f32 = 15.0;

/// Interval between animation frames while the backdrop is animated.
pub const BACKDROP_FRAME_MS: u64 = 50;

/// Cross-fade between gradient sets when the quality tag changes.
pub const BACKDROP_FADE_MS: u64 = 500;

/// Interval of the toast auto-dismiss check when nothing animates.
pub const NOTIFICATION_TICK_MS: u64 = 250;

const _: () = {
    assert!(MIN_UPLOAD_DELAY_MS <= DEFAULT_UPLOAD_DELAY_MS);
    assert!(DEFAULT_UPLOAD_DELAY_MS <= MAX_UPLOAD_DELAY_MS);
    assert!(BACKDROP_FRAME_MS > 0);
    assert!(BACKDROP_FADE_MS > BACKDROP_FRAME_MS);
    assert!(NOTIFICATION_TICK_MS > 0);
};
