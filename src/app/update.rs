//! Message handling

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use iced::{Point, Rectangle, Task};
use progress_hud::hud::{DismissResult, HudConfig, LifecyclePhase};
use progress_hud::ui::widgets::Toast;

use super::{App, Job, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Keep the HUD clock current even when no frame subscription runs
        self.elapsed = self.started.elapsed();
        self.scheduler.advance_to(self.elapsed);

        match message {
            Message::Noop => {}
            Message::IndicatorTypeSelected(indicator_type) => {
                self.config.indicator_type = indicator_type;
                self.push_config();
            }
            Message::BackgroundStyleSelected(style) => {
                self.config.background_style = style;
                self.push_config();
            }
            Message::BackgroundBlurSelected(style) => {
                self.config.background_blur_style = style;
                self.push_config();
            }
            Message::CenterBlurSelected(style) => {
                self.config.center_blur_style = style;
                self.push_config();
            }
            Message::TogglePercentLabel(on) => {
                self.config.show_percent_label = on;
                self.push_config();
            }
            Message::ToggleLinearSlider(on) => {
                self.config.show_linear_slider = on;
                self.push_config();
            }
            Message::ToggleDynamicOpacity(on) => {
                self.config.dynamic_overlay_opacity = on;
                self.push_config();
            }
            Message::ToggleCenterPanel(on) => {
                self.config.show_center_panel = on;
                self.push_config();
            }
            Message::SaveConfig => {
                self.toast = Some(match save_config(&self.config) {
                    Ok(path) => Toast::success(format!("Saved to {}", path.display())),
                    Err(e) => {
                        tracing::warn!("{:#}", e);
                        Toast::error(format!("{:#}", e))
                    }
                });
            }
            Message::ReloadConfig => {
                self.config = HudConfig::load();
                // Asset files may have changed on disk too
                self.loader.clear_cache();
                self.push_config();
                self.toast = Some(Toast::info("Settings reloaded"));
            }

            Message::TaskTitleChanged(title) => self.task_title = title,
            Message::ToggleBlockInteraction(on) => self.block_interaction = on,
            Message::ToggleSimulateFailure(on) => self.simulate_failure = on,
            Message::DismissDelayChanged(ms) => {
                self.dismiss_delay = Duration::from_millis(ms.max(0.0) as u64);
            }
            Message::StartJob => self.start_job(),
            Message::FailJob => {
                if self.job.take().is_some() {
                    self.finish(DismissResult::Failure);
                }
            }
            Message::CancelDismiss => {
                if let Some(handle) = self.pending_dismiss.take() {
                    handle.cancel();
                    self.toast = Some(Toast::info("Dismiss cancelled"));
                }
            }
            Message::CloseHud => {
                if self.job.is_none() && self.hud.phase().is_visible() {
                    self.finish(DismissResult::Success);
                }
            }
            Message::JobTick => {
                if let Some(job) = self.job.as_mut() {
                    let done = job.advance();
                    let progress = job.progress;
                    let outcome = job.outcome;
                    self.hud.set_progress(Some(&self.shared_host()), progress);
                    if done {
                        self.job = None;
                        self.finish(outcome);
                    }
                }
            }

            Message::Frame(now) => self.fade.tick(now),
            Message::WindowResized(size) => {
                self.host
                    .borrow_mut()
                    .set_frame(Rectangle::new(Point::ORIGIN, size));
            }
            Message::DismissToast => self.toast = None,
        }

        self.sync();
        Task::none()
    }

    fn push_config(&mut self) {
        self.hud.set_config(self.config.clone());
    }

    fn start_job(&mut self) {
        if self.job.is_some() {
            return;
        }
        let outcome = if self.simulate_failure {
            DismissResult::Failure
        } else {
            DismissResult::Success
        };

        self.pending_dismiss = None;
        self.toast = None;
        self.hud
            .show(Some(&self.shared_host()), &self.task_title, self.block_interaction);
        self.job = Some(Job::new(outcome));
        tracing::info!("Job started, ends with {:?}", outcome);
    }

    fn finish(&mut self, result: DismissResult) {
        let inbox = Rc::clone(&self.finished);
        self.pending_dismiss = self.hud.dismiss(
            Some(&self.shared_host()),
            result,
            self.dismiss_delay,
            Some(Box::new(move || inbox.borrow_mut().push(result))),
        );
    }

    /// Run queued HUD work and mirror the HUD into view state
    fn sync(&mut self) {
        self.scheduler.run_until_idle();

        let scene = self.hud.scene();
        self.fade.set_visible(scene.is_some());
        if scene.is_some() {
            self.last_scene = scene;
        }

        if self.hud.phase() == LifecyclePhase::Removed {
            self.pending_dismiss = None;
        }

        let finished: Vec<_> = self.finished.borrow_mut().drain(..).collect();
        if let Some(result) = finished.last() {
            self.toast = Some(Toast::finished(*result));
        }
    }
}

fn save_config(config: &HudConfig) -> anyhow::Result<PathBuf> {
    config.save().context("Failed to save HUD settings")
}
