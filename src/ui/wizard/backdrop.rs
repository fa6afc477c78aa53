// SPDX-License-Identifier: MPL-2.0
//! Animated gradient behind the wizard card.
//!
//! The gradient slowly sweeps back and forth over a fixed cycle, and when the
//! quality tag changes the old colors fade into the new ones.

use crate::app::config::{BACKDROP_CYCLE_SECS, BACKDROP_FADE_MS};
use crate::ui::design_tokens::backdrop as tokens;
use crate::ui::styles;
use crate::ui::theming::backdrop_stops;
use crate::wizard::Backdrop;
use iced::widget::container;
use iced::{Color, Degrees};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Fraction of the gradient the inner stops travel at the ends of a sweep.
const DRIFT: f32 = 0.12;

/// Position within the animation cycle, in `0.0..1.0`.
#[must_use]
pub fn phase(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() % BACKDROP_CYCLE_SECS) / BACKDROP_CYCLE_SECS
}

/// Tracks the current backdrop and the one it is fading from.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    current: Backdrop,
    from: Option<(Backdrop, Instant)>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Backdrop::Default)
    }
}

impl Transition {
    #[must_use]
    pub fn new(current: Backdrop) -> Self {
        Self {
            current,
            from: None,
        }
    }

    /// Switches to `next`, starting a fade at `now`. No-op if unchanged.
    pub fn retarget(&mut self, next: Backdrop, now: Instant) {
        if next == self.current {
            return;
        }
        self.from = Some((self.current, now));
        self.current = next;
    }

    #[must_use]
    pub fn current(&self) -> Backdrop {
        self.current
    }

    /// Whether a fade is still running at `now`.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.from
            .is_some_and(|(_, started)| now.saturating_duration_since(started) < fade())
    }

    /// Gradient stops to paint at `now`.
    #[must_use]
    pub fn stops(&self, now: Instant) -> [Color; 4] {
        let target = backdrop_stops(self.current);
        let Some((from, started)) = self.from else {
            return target;
        };
        let progress = now.saturating_duration_since(started).as_secs_f32() / fade().as_secs_f32();
        if progress >= 1.0 {
            return target;
        }
        let source = backdrop_stops(from);
        std::array::from_fn(|i| mix(source[i], target[i], progress))
    }
}

fn fade() -> Duration {
    Duration::from_millis(BACKDROP_FADE_MS)
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

/// Container style for the backdrop at the given cycle phase.
#[must_use]
pub fn style(stops: [Color; 4], phase: f32) -> container::Style {
    // 0 -> 1 -> 0 over one cycle, easing at both ends.
    let sweep = (1.0 - (TAU * phase).cos()) / 2.0;
    let angle = Degrees(tokens::BASE_ANGLE_DEGREES + tokens::SWING_DEGREES * (sweep - 0.5));
    styles::container::backdrop(stops, angle, DRIFT * (sweep - 0.5))
}
