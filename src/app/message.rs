// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::notifications;
use crate::ui::wizard as wizard_view;
use crate::wizard::{FileCandidate, FileEvent, FileSource, UploadReceipt, Variant};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Intents raised by the wizard card.
    Wizard(wizard_view::Message),
    /// A browse or take-photo picker closed (possibly with no file).
    DialogResult(FileEvent),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A picked or dropped file has been read from disk.
    CandidateLoaded {
        source: FileSource,
        path: PathBuf,
        result: Result<FileCandidate, Error>,
    },
    /// The simulated upload completed.
    UploadFinished(UploadReceipt),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for the backdrop animation and toast auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `he`, `en-US`).
    pub lang: Option<String>,
    /// Optional presentation variant, overriding `[wizard] variant`.
    pub variant: Option<Variant>,
    /// Optional image path to preselect on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `PHOTO_UPLOADER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_UPLOADER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
