// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the upload wizard.
//!
//! The `App` struct wires the wizard state machine to the outside world:
//! file pickers, drag-and-drop, the simulated upload task, localization,
//! persisted picker folders and toast notifications. Policy decisions (which
//! step accepts drops, when pickers may open, how teardown releases the
//! preview) live close to the update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::wizard::backdrop::{self, Transition};
use crate::wizard::{FileSource, Presentation, WizardState};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    wizard: WizardState,
    presentation: Presentation,
    theme_mode: ThemeMode,
    /// Delay of the simulated upload.
    upload_delay: Duration,
    /// Whether the backdrop gradient drifts over time.
    animate_background: bool,
    /// Persisted picker folders.
    app_state: persisted_state::AppState,
    /// Directory override for `state.cbor`; `None` resolves the data dir.
    state_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    backdrop: Transition,
    /// Source of the pick in progress (picker open or file being read).
    pending_pick: Option<FileSource>,
    started_at: Instant,
    /// Time of the last tick; the view reads the animation clock from here.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.presentation.variant)
            .field("step", &self.wizard.step())
            .field("quality", &self.wizard.quality())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings.
///
/// Close requests are handled by the app so the preview is released before
/// the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            i18n: I18n::default(),
            wizard: WizardState::new(),
            presentation: Presentation::default(),
            theme_mode: ThemeMode::default(),
            upload_delay: Duration::from_millis(config::DEFAULT_UPLOAD_DELAY_MS),
            animate_background: true,
            app_state: persisted_state::AppState::default(),
            state_dir: None,
            notifications: notifications::Manager::new(),
            backdrop: Transition::default(),
            pending_pick: None,
            started_at: now,
            now,
        }
    }
}

impl App {
    /// Initializes application state from config, persisted state and CLI
    /// flags, optionally reading a preselected image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let variant = flags.variant.unwrap_or(config.wizard.variant);
        log::info!("starting {variant} wizard");

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            presentation: variant.presentation(),
            theme_mode: config.general.theme_mode,
            upload_delay: config.upload.delay(),
            animate_background: config.display.animate_background.unwrap_or(true),
            app_state,
            ..Self::default()
        };

        // Show warnings for config/state loading issues
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => app.preselect(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    /// Reads an image given on the command line as if it had been dropped.
    ///
    /// Ignored while the variant still hides the acquisition controls.
    fn preselect(&mut self, path: PathBuf) -> Task<Message> {
        let mut ctx = self.update_context();
        update::handle_file_dropped(&mut ctx, path)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let step_title = self.i18n.tr(self.wizard.title().i18n_key());
        format!("{step_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    /// Whether animation frames are needed right now.
    fn is_animating(&self) -> bool {
        self.animate_background || self.backdrop.is_fading(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            wizard: &mut self.wizard,
            presentation: &self.presentation,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            backdrop: &mut self.backdrop,
            pending_pick: &mut self.pending_pick,
            upload_delay: self.upload_delay,
            state_dir: self.state_dir.as_deref(),
            now: &mut self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Wizard(wizard_message) => {
                update::handle_wizard_message(&mut self.update_context(), wizard_message)
            }
            Message::DialogResult(event) => {
                update::handle_dialog_result(&mut self.update_context(), event)
            }
            Message::FileDropped(path) => {
                update::handle_file_dropped(&mut self.update_context(), path)
            }
            Message::CandidateLoaded {
                source,
                path,
                result,
            } => update::handle_candidate_loaded(&mut self.update_context(), source, &path, result),
            Message::UploadFinished(receipt) => {
                update::handle_upload_finished(&mut self.update_context(), &receipt)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(instant) => {
                self.now = instant;
                self.notifications.tick(instant);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                // Release the preview before the window is torn down.
                self.wizard.release_preview();
                log::info!(
                    "closing window, {} preview(s) still live",
                    self.wizard.preview_ledger().live()
                );
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let phase = if self.animate_background {
            backdrop::phase(self.now.saturating_duration_since(self.started_at))
        } else {
            0.0
        };

        view::view(view::ViewContext {
            i18n: &self.i18n,
            wizard: &self.wizard,
            presentation: &self.presentation,
            backdrop: self.backdrop.stops(self.now),
            phase,
            busy: self.pending_pick.is_some(),
            notifications: &self.notifications,
        })
    }
}
