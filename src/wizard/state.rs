// SPDX-License-Identifier: MPL-2.0
//! Wizard state machine.
//!
//! ```text
//! Select --(image chosen)--> Review --(upload confirmed)--> Done
//!   ^  \--(non-image)--> Select (error set)                  |
//!   +---------------------------(reset)----------------------+
//! ```
//!
//! All transitions are driven by user events. Rendering reads the state but
//! never mutates it; derived values such as the title and backdrop are
//! computed on demand.

use super::candidate::FileCandidate;
use super::preview::{Preview, PreviewLedger, PreviewSlot};
use super::upload::{UploadReceipt, UploadRequest, UploadTicket};
use std::fmt;
use std::path::Path;

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Select,
    Review,
    Done,
}

impl Step {
    /// One-based position used for the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Select => 1,
            Step::Review => 2,
            Step::Done => 3,
        }
    }
}

/// Binary quality label attached to the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityTag {
    Good,
    Bad,
}

impl QualityTag {
    /// Lowercase label, as shown next to "Photo Quality:".
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QualityTag::Good => "good",
            QualityTag::Bad => "bad",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            QualityTag::Good => "quality-good",
            QualityTag::Bad => "quality-bad",
        }
    }
}

impl fmt::Display for QualityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only validation failure the wizard reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    InvalidFileType,
}

impl SelectionError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SelectionError::InvalidFileType => "error-invalid-file-type",
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidFileType => f.write_str("Please select an image file."),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Background treatment, keyed only on the quality tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Default,
    Good,
    Bad,
}

impl From<Option<QualityTag>> for Backdrop {
    fn from(quality: Option<QualityTag>) -> Self {
        match quality {
            None => Backdrop::Default,
            Some(QualityTag::Good) => Backdrop::Good,
            Some(QualityTag::Bad) => Backdrop::Bad,
        }
    }
}

/// Title shown on the card, derived from `(quality, step)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKey {
    SelectUnrated,
    SelectGood,
    SelectBad,
    Review,
    Done,
}

impl TitleKey {
    /// Pure derivation; recomputed on every render.
    #[must_use]
    pub fn derive(quality: Option<QualityTag>, step: Step) -> Self {
        match (step, quality) {
            (Step::Select, None) => TitleKey::SelectUnrated,
            (Step::Select, Some(QualityTag::Good)) => TitleKey::SelectGood,
            (Step::Select, Some(QualityTag::Bad)) => TitleKey::SelectBad,
            (Step::Review, _) => TitleKey::Review,
            (Step::Done, _) => TitleKey::Done,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TitleKey::SelectUnrated => "title-select-unrated",
            TitleKey::SelectGood => "title-select-good",
            TitleKey::SelectBad => "title-select-bad",
            TitleKey::Review => "title-review",
            TitleKey::Done => "title-done",
        }
    }
}

/// The file accepted by the wizard.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    candidate: FileCandidate,
}

impl SelectedFile {
    #[must_use]
    pub fn name(&self) -> &str {
        self.candidate.name()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.candidate.path()
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.candidate.size_bytes()
    }

    #[must_use]
    pub fn candidate(&self) -> &FileCandidate {
        &self.candidate
    }
}

/// Transient wizard state. Lives for one window session.
#[derive(Debug, Default)]
pub struct WizardState {
    step: Step,
    file: Option<SelectedFile>,
    preview: PreviewSlot,
    ledger: PreviewLedger,
    quality: Option<QualityTag>,
    error: Option<SelectionError>,
    uploading: bool,
    /// Ticket of the upload in flight; completions with another ticket are stale.
    ticket: UploadTicket,
}

impl WizardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and accepts `candidate`.
    ///
    /// On success the previous preview is released, the error is cleared and
    /// the wizard moves to review. On failure only the error is set.
    pub fn select(&mut self, candidate: FileCandidate) -> Result<(), SelectionError> {
        if !candidate.content_type().is_image() {
            log::info!(
                "rejected {} ({})",
                candidate.name(),
                candidate.content_type()
            );
            self.error = Some(SelectionError::InvalidFileType);
            return Err(SelectionError::InvalidFileType);
        }

        let preview = self.ledger.acquire(&candidate);
        self.preview.replace(preview);
        log::info!("selected {} ({})", candidate.name(), candidate.content_type());
        self.file = Some(SelectedFile { candidate });
        self.error = None;
        self.transition(Step::Review);
        Ok(())
    }

    /// Sets the quality tag, overwriting any previous choice on Select.
    ///
    /// On Review the tag can only be filled in while still unset; once set it
    /// is read-only through Review and Done.
    pub fn set_quality(&mut self, quality: QualityTag) {
        let settable = match self.step {
            Step::Select => true,
            Step::Review => self.quality.is_none() && !self.uploading,
            Step::Done => false,
        };
        if !settable {
            log::debug!("ignoring quality {quality} on {:?}", self.step);
            return;
        }
        self.quality = Some(quality);
    }

    /// Whether the upload trigger is enabled.
    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.step == Step::Review
            && !self.uploading
            && self.file.is_some()
            && self.quality.is_some()
    }

    /// Starts an upload if the preconditions hold. Returns the request to run,
    /// or `None` when the call is a no-op.
    pub fn begin_upload(&mut self) -> Option<UploadRequest> {
        if !self.can_upload() {
            return None;
        }
        let file = self.file.as_ref()?;
        let quality = self.quality?;

        let request = UploadRequest {
            ticket: self.ticket.next(),
            file_name: file.name().to_string(),
            path: file.path().to_path_buf(),
            size_bytes: file.size_bytes(),
            quality,
        };
        self.ticket = request.ticket;
        self.uploading = true;
        Some(request)
    }

    /// Completes the in-flight upload. Completions for uploads that are no
    /// longer in flight (e.g. started before a reset) are ignored.
    pub fn finish_upload(&mut self, receipt: &UploadReceipt) -> bool {
        if !self.uploading || receipt.ticket != self.ticket {
            log::debug!("ignoring stale upload completion for {}", receipt.file_name);
            return false;
        }
        self.uploading = false;
        self.transition(Step::Done);
        true
    }

    /// Returns to the initial state, releasing the preview. Idempotent.
    pub fn reset(&mut self) {
        self.preview.release();
        self.file = None;
        self.quality = None;
        self.error = None;
        self.uploading = false;
        self.transition(Step::Select);
    }

    /// Releases resources held for display (window teardown).
    pub fn release_preview(&mut self) {
        self.preview.release();
    }

    fn transition(&mut self, next: Step) {
        if self.step != next {
            log::info!("wizard step {:?} -> {next:?}", self.step);
            self.step = next;
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.current()
    }

    #[must_use]
    pub fn quality(&self) -> Option<QualityTag> {
        self.quality
    }

    #[must_use]
    pub fn error(&self) -> Option<SelectionError> {
        self.error
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    #[must_use]
    pub fn title(&self) -> TitleKey {
        TitleKey::derive(self.quality, self.step)
    }

    #[must_use]
    pub fn backdrop(&self) -> Backdrop {
        Backdrop::from(self.quality)
    }

    /// Ledger tracking this wizard's preview handles.
    #[must_use]
    pub fn preview_ledger(&self) -> &PreviewLedger {
        &self.ledger
    }

    /// Whether the state equals a freshly created wizard.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.step == Step::Select
            && self.file.is_none()
            && self.preview.is_empty()
            && self.quality.is_none()
            && self.error.is_none()
            && !self.uploading
    }
}
