// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the parts of the `App`
//! they may touch, apply the message to the wizard state and return the
//! follow-up task (picker, file read or simulated upload).

use super::persisted_state::AppState;
use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::wizard::backdrop::Transition;
use crate::ui::wizard::Message as WizardMessage;
use crate::wizard::{
    upload, FileCandidate, FileEvent, FileSource, Presentation, Step, UploadReceipt, WizardState,
    IMAGE_EXTENSIONS,
};
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub wizard: &'a mut WizardState,
    pub presentation: &'a Presentation,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    pub backdrop: &'a mut Transition,
    /// Source of the pick being handled (picker open or file being read).
    pub pending_pick: &'a mut Option<FileSource>,
    pub upload_delay: Duration,
    /// Directory override for the persisted state file.
    pub state_dir: Option<&'a Path>,
    pub now: &'a mut Instant,
}

impl UpdateContext<'_> {
    /// Restarts the backdrop fade if the quality changed.
    fn sync_backdrop(&mut self) {
        let now = Instant::now();
        *self.now = now;
        self.backdrop.retarget(self.wizard.backdrop(), now);
    }

    /// Persists the picker folders, surfacing failures as a warning toast.
    fn save_app_state(&mut self) {
        if let Some(key) = self.app_state.save_to(self.state_dir.map(Path::to_path_buf)) {
            self.notifications.push(Notification::warning(key));
        }
    }
}

/// Handles intents raised by the wizard card.
pub fn handle_wizard_message(ctx: &mut UpdateContext<'_>, message: WizardMessage) -> Task<Message> {
    match message {
        WizardMessage::Quality(tag) => {
            ctx.wizard.set_quality(tag);
            ctx.sync_backdrop();
            Task::none()
        }
        WizardMessage::Browse => open_picker(ctx, FileSource::Browse),
        WizardMessage::Camera => open_picker(ctx, FileSource::Camera),
        WizardMessage::Upload => match ctx.wizard.begin_upload() {
            Some(request) => {
                let delay = ctx.upload_delay;
                Task::perform(upload::simulate(request, delay), Message::UploadFinished)
            }
            None => Task::none(),
        },
        WizardMessage::Reset => {
            ctx.wizard.reset();
            ctx.sync_backdrop();
            Task::none()
        }
    }
}

/// Opens the browse or take-photo picker.
///
/// Ignored while another pick is in progress, outside the select step, or
/// while the variant still hides the acquisition controls.
fn open_picker(ctx: &mut UpdateContext<'_>, source: FileSource) -> Task<Message> {
    if ctx.pending_pick.is_some()
        || ctx.wizard.step() != Step::Select
        || !ctx.presentation.shows_acquisition(ctx.wizard.quality())
    {
        return Task::none();
    }
    *ctx.pending_pick = Some(source);

    let title = ctx.i18n.tr(match source {
        FileSource::Camera => "dialog-camera-title",
        FileSource::Browse | FileSource::Drop => "dialog-browse-title",
    });
    let start_dir = ctx.app_state.start_directory(source);
    let filter_name = ctx.i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS);

            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(&dir);
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::DialogResult(FileEvent::from_pick(source, path)),
    )
}

/// Handles the result of a picker. A cancelled picker is a no-op.
pub fn handle_dialog_result(ctx: &mut UpdateContext<'_>, event: FileEvent) -> Task<Message> {
    *ctx.pending_pick = None;

    let Some(path) = event.first().map(std::path::Path::to_path_buf) else {
        log::debug!("{:?} picker closed without a file", event.source);
        return Task::none();
    };

    load_candidate(ctx, event.source, path)
}

/// Handles a file dropped on the window. Only the select step accepts drops.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.wizard.step() != Step::Select
        || ctx.pending_pick.is_some()
        || !ctx.presentation.shows_acquisition(ctx.wizard.quality())
    {
        log::debug!("ignoring drop of {}", path.display());
        return Task::none();
    }

    load_candidate(ctx, FileSource::Drop, path)
}

/// Reads `path` off the UI thread.
pub fn load_candidate(
    ctx: &mut UpdateContext<'_>,
    source: FileSource,
    path: PathBuf,
) -> Task<Message> {
    *ctx.pending_pick = Some(source);

    let read_path = path.clone();
    Task::perform(
        async move { FileCandidate::inspect(&read_path) },
        move |result| Message::CandidateLoaded {
            source,
            path: path.clone(),
            result,
        },
    )
}

/// Applies a file that finished reading.
pub fn handle_candidate_loaded(
    ctx: &mut UpdateContext<'_>,
    source: FileSource,
    path: &Path,
    result: Result<FileCandidate, Error>,
) -> Task<Message> {
    *ctx.pending_pick = None;

    let candidate = match result {
        Ok(candidate) => candidate,
        Err(err) => {
            log::warn!("could not read {}: {err}", path.display());
            let file = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("file", file));
            return Task::none();
        }
    };

    if ctx.wizard.step() != Step::Select {
        log::debug!("ignoring {} loaded after leaving select", candidate.name());
        return Task::none();
    }

    if ctx.wizard.select(candidate).is_err() {
        return Task::none();
    }

    ctx.notifications.clear_file_errors();
    if ctx.app_state.remember_pick(source, path) {
        ctx.save_app_state();
    }
    Task::none()
}

/// Applies a finished upload. Stale completions are ignored by the wizard.
pub fn handle_upload_finished(ctx: &mut UpdateContext<'_>, receipt: &UploadReceipt) -> Task<Message> {
    if ctx.wizard.finish_upload(receipt) {
        log::info!(
            "{} uploaded as {} in {:?}",
            receipt.file_name,
            receipt.quality,
            receipt.elapsed
        );
    }
    Task::none()
}
