// SPDX-License-Identifier: MPL-2.0
//! Photo uploader wizard domain: state machine, file acquisition, preview
//! lifecycle and the simulated upload task.
//!
//! Nothing here renders; the UI layer in [`crate::ui::wizard`] is a pure
//! function of [`WizardState`] and a [`Presentation`].

pub mod candidate;
pub mod preview;
pub mod state;
pub mod upload;
pub mod variant;

pub use candidate::{ContentType, FileCandidate, FileEvent, FileSource, IMAGE_EXTENSIONS};
pub use preview::{Preview, PreviewLedger, PreviewSource};
pub use state::{Backdrop, QualityTag, SelectionError, Step, TitleKey, WizardState};
pub use upload::{UploadReceipt, UploadRequest, UploadTicket};
pub use variant::{Presentation, Variant};
