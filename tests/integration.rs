// SPDX-License-Identifier: MPL-2.0
use photo_uploader::app::config::{self, Config, GeneralConfig, UploadConfig, WizardConfig};
use photo_uploader::app::persisted_state::AppState;
use photo_uploader::i18n::fluent::I18n;
use photo_uploader::wizard::{
    upload, FileCandidate, FileSource, QualityTag, SelectionError, Step, TitleKey, Variant,
    WizardState,
};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_config(&english, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let hebrew = Config {
        general: GeneralConfig {
            language: Some("he".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_config(&hebrew, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "he");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("he".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_config_round_trip_keeps_wizard_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        wizard: WizardConfig {
            variant: Variant::Gated,
        },
        upload: UploadConfig {
            simulated_delay_ms: Some(750),
        },
        ..Config::default()
    };
    write_config(&config, &config_path);

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.upload.delay(), Duration::from_millis(750));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[upload\nsimulated_delay_ms = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_picker_folders_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let photos = dir.path().join("photos");
    fs::create_dir(&photos).expect("Failed to create photos dir");

    let mut state = AppState::default();
    assert!(state.remember_pick(FileSource::Browse, &photos.join("photo.png")));
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (reloaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(reloaded.start_directory(FileSource::Browse), Some(photos));
}

#[tokio::test(start_paused = true)]
async fn test_photo_upload_reaches_done() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("photo.png");
    fs::write(&path, PNG_HEADER).expect("Failed to write image");

    let mut wizard = WizardState::new();
    wizard.set_quality(QualityTag::Good);
    assert_eq!(wizard.title(), TitleKey::SelectGood);

    let candidate = FileCandidate::inspect(&path).expect("Failed to read image");
    wizard.select(candidate).expect("png should be accepted");
    assert_eq!(wizard.step(), Step::Review);
    assert!(wizard.preview().is_some());

    let request = wizard.begin_upload().expect("upload should start");
    assert!(wizard.is_uploading());
    assert!(wizard.begin_upload().is_none());

    let receipt = upload::simulate(request, Duration::from_millis(2000)).await;
    assert!(receipt.elapsed >= Duration::from_millis(2000));
    assert!(wizard.finish_upload(&receipt));
    assert_eq!(wizard.step(), Step::Done);
    assert_eq!(wizard.quality(), Some(QualityTag::Good));

    wizard.reset();
    assert!(wizard.is_initial());
    assert_eq!(wizard.preview_ledger().live(), 0);
}

#[test]
fn test_document_is_rejected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("document.pdf");
    fs::write(&path, b"%PDF-1.7\n").expect("Failed to write document");

    let mut wizard = WizardState::new();
    let candidate = FileCandidate::inspect(&path).expect("Failed to read document");
    assert_eq!(
        wizard.select(candidate),
        Err(SelectionError::InvalidFileType)
    );
    assert_eq!(wizard.step(), Step::Select);
    assert_eq!(wizard.error(), Some(SelectionError::InvalidFileType));

    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(
        i18n.tr(SelectionError::InvalidFileType.i18n_key()),
        "Please select an image file."
    );
}

#[test]
fn test_gated_variant_titles_follow_state() {
    let presentation = Variant::Gated.presentation();
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let mut wizard = WizardState::new();

    assert!(!presentation.shows_acquisition(wizard.quality()));
    assert_eq!(
        i18n.tr(presentation.title_key(&wizard)),
        "How does the photo look?"
    );

    wizard.set_quality(QualityTag::Bad);
    assert!(presentation.shows_acquisition(wizard.quality()));
    assert_eq!(
        i18n.tr(presentation.title_key(&wizard)),
        "Upload the photo that needs work"
    );
}
