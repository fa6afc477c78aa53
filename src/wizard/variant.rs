// SPDX-License-Identifier: MPL-2.0
//! Presentation variants of the wizard.
//!
//! Both variants drive the same [`WizardState`](super::WizardState); they
//! only differ in copy, card sizing and whether the acquisition controls
//! wait for a quality choice.

use super::state::{QualityTag, TitleKey, WizardState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Static title, acquisition controls always visible.
    #[default]
    Classic,
    /// Rating first: upload/capture stay hidden until a quality is chosen,
    /// and the title follows the wizard state.
    Gated,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Gated];

    #[must_use]
    pub fn presentation(self) -> Presentation {
        match self {
            Variant::Classic => Presentation {
                variant: self,
                gate_acquisition_on_quality: false,
                reactive_title: false,
                card_width: 400.0,
                title_key: "classic-title",
                description_key: "classic-description",
            },
            Variant::Gated => Presentation {
                variant: self,
                gate_acquisition_on_quality: true,
                reactive_title: true,
                card_width: 440.0,
                title_key: "gated-title",
                description_key: "gated-description",
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => f.write_str("classic"),
            Variant::Gated => f.write_str("gated"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "gated" => Ok(Variant::Gated),
            other => Err(format!("unknown variant: {other} (expected classic or gated)")),
        }
    }
}

/// Copy and layout parameters for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub variant: Variant,
    pub gate_acquisition_on_quality: bool,
    pub reactive_title: bool,
    pub card_width: f32,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

impl Default for Presentation {
    fn default() -> Self {
        Variant::default().presentation()
    }
}

impl Presentation {
    /// Whether the upload/capture triggers and drop zone are shown.
    #[must_use]
    pub fn shows_acquisition(&self, quality: Option<QualityTag>) -> bool {
        !self.gate_acquisition_on_quality || quality.is_some()
    }

    /// i18n key of the card title for the current state.
    #[must_use]
    pub fn title_key(&self, state: &WizardState) -> &'static str {
        if self.reactive_title {
            TitleKey::derive(state.quality(), state.step()).i18n_key()
        } else {
            self.title_key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_always_shows_acquisition() {
        let presentation = Variant::Classic.presentation();
        assert!(presentation.shows_acquisition(None));
        assert!(presentation.shows_acquisition(Some(QualityTag::Bad)));
    }

    #[test]
    fn gated_hides_acquisition_until_rated() {
        let presentation = Variant::Gated.presentation();
        assert!(!presentation.shows_acquisition(None));
        assert!(presentation.shows_acquisition(Some(QualityTag::Good)));
    }

    #[test]
    fn classic_title_is_static() {
        let presentation = Variant::Classic.presentation();
        let mut state = WizardState::new();
        let before = presentation.title_key(&state);
        state.set_quality(QualityTag::Good);
        assert_eq!(presentation.title_key(&state), before);
    }

    #[test]
    fn gated_title_tracks_quality() {
        let presentation = Variant::Gated.presentation();
        let mut state = WizardState::new();
        assert_eq!(presentation.title_key(&state), "title-select-unrated");
        state.set_quality(QualityTag::Bad);
        assert_eq!(presentation.title_key(&state), "title-select-bad");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Gated".parse::<Variant>(), Ok(Variant::Gated));
        assert_eq!("classic".parse::<Variant>(), Ok(Variant::Classic));
        assert!("fancy".parse::<Variant>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }
}
