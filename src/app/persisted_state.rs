// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Only picker conveniences are remembered here (which folders the dialogs
//! open in). The wizard itself never outlives the window.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `PHOTO_UPLOADER_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::wizard::FileSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory a photo was picked from with the file browser.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Last directory a photo was picked from with the "take photo" picker.
    #[serde(default)]
    pub last_capture_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with the i18n key of a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        log::warn!("could not parse {}: {err}", path.display());
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state; `None` resolves the data directory.
    ///
    /// Returns the i18n key of a warning if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Directory the picker for `source` should open in, if it still exists.
    #[must_use]
    pub fn start_directory(&self, source: FileSource) -> Option<PathBuf> {
        let remembered = match source {
            FileSource::Browse => self.last_open_directory.clone(),
            FileSource::Camera => self
                .last_capture_directory
                .clone()
                .or_else(paths::capture_dir),
            FileSource::Drop => None,
        };
        remembered.filter(|dir| dir.exists())
    }

    /// Remembers the parent of `file_path` for the picker that produced it.
    ///
    /// Returns whether anything changed. Drops are not remembered.
    pub fn remember_pick(&mut self, source: FileSource, file_path: &Path) -> bool {
        let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return false;
        };
        let slot = match source {
            FileSource::Browse => &mut self.last_open_directory,
            FileSource::Camera => &mut self.last_capture_directory,
            FileSource::Drop => return false,
        };
        if slot.as_deref() == Some(parent) {
            return false;
        }
        *slot = Some(parent.to_path_buf());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_directories() {
        let state = AppState::default();
        assert!(state.last_open_directory.is_none());
        assert!(state.last_capture_directory.is_none());
    }

    #[test]
    fn remember_pick_extracts_parent_per_source() {
        let mut state = AppState::default();
        assert!(state.remember_pick(
            FileSource::Browse,
            Path::new("/home/user/photos/image.jpg")
        ));
        assert!(state.remember_pick(
            FileSource::Camera,
            Path::new("/home/user/Pictures/shot.png")
        ));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
        assert_eq!(
            state.last_capture_directory,
            Some(PathBuf::from("/home/user/Pictures"))
        );
    }

    #[test]
    fn remember_pick_ignores_root_drops_and_repeats() {
        let mut state = AppState::default();
        assert!(!state.remember_pick(FileSource::Browse, Path::new("/")));
        assert!(!state.remember_pick(FileSource::Drop, Path::new("/tmp/a.png")));
        assert!(state.remember_pick(FileSource::Browse, Path::new("/tmp/a.png")));
        assert!(!state.remember_pick(FileSource::Browse, Path::new("/tmp/b.png")));
    }

    #[test]
    fn start_directory_skips_missing_folders() {
        let temp_dir = tempdir().expect("create temp dir");
        let state = AppState {
            last_open_directory: Some(temp_dir.path().to_path_buf()),
            last_capture_directory: None,
        };
        assert_eq!(
            state.start_directory(FileSource::Browse),
            Some(temp_dir.path().to_path_buf())
        );

        let gone = AppState {
            last_open_directory: Some(temp_dir.path().join("missing")),
            last_capture_directory: None,
        };
        assert!(gone.start_directory(FileSource::Browse).is_none());
        assert!(gone.start_directory(FileSource::Drop).is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let original = AppState {
            last_open_directory: Some(PathBuf::from("/test/open/directory")),
            last_capture_directory: Some(PathBuf::from("/test/capture")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");
        let state = AppState::default();

        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
