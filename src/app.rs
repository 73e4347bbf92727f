//! Demo application
//!
//! A small control panel over which the HUD is shown. A simulated job
//! reports progress on a timer; the HUD's scheduler is driven by window
//! frames so queued work and dismiss timers run on the UI thread.

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

pub use message::Message;
pub use state::{App, Job, WINDOW_SIZE};

/// Interval between simulated progress reports
pub const JOB_TICK: std::time::Duration = std::time::Duration::from_millis(60);

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = progress_hud::hud::HudConfig::load();
        if config.is_degenerate() {
            tracing::warn!("HUD center panel is too small for the slider and title");
        }
        (Self::with_config(config), Task::none())
    }

    pub fn title(&self) -> String {
        match self.hud.phase() {
            phase if phase.is_visible() => format!("Progress HUD - {}", self.task_title),
            _ => "Progress HUD".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frames while anything on the HUD clock is pending, job ticks while
    /// a job runs, and window resizes always
    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if subscription_logic::needs_frames(
            self.hud.phase().is_visible(),
            self.fade.is_animating(),
            self.scheduler.has_pending(),
        ) {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        let job = if self.job.is_some() {
            iced::time::every(JOB_TICK).map(|_| Message::JobTick)
        } else {
            Subscription::none()
        };

        let resize = iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([frames, job, resize])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frames(hud_visible: bool, fade_animating: bool, scheduler_pending: bool) -> bool {
        hud_visible || fade_animating || scheduler_pending
    }
}
