//! Mutable per-instance HUD state

use super::assets::{AssetPhase, IndicatorContent};
use super::geometry::{HostGeometry, clamp_progress};

/// Lifecycle phase of a HUD instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    /// Constructed, never shown
    #[default]
    Idle,
    /// Attached to a host
    Shown,
    /// Attached and receiving progress reports
    Updating,
    /// Result shown, removal pending
    Dismissing,
    /// Detached; may be shown again
    Removed,
}

impl LifecyclePhase {
    /// Phases in which the overlay is on screen
    pub fn is_visible(self) -> bool {
        matches!(
            self,
            LifecyclePhase::Shown | LifecyclePhase::Updating | LifecyclePhase::Dismissing
        )
    }

    /// Phases in which progress reports are applied
    pub fn accepts_progress(self) -> bool {
        self.is_visible()
    }
}

/// State owned by one HUD instance and mutated only from scheduler tasks
#[derive(Debug, Clone)]
pub struct ProgressState {
    pub phase: LifecyclePhase,
    /// `None` until the first progress report after `show`
    pub progress: Option<f32>,
    pub title: String,
    /// Listed in the host's children; cleared on removal
    pub attached: bool,
    /// Circular arc composed into the overlay
    pub circular_active: bool,
    pub content: IndicatorContent,
    /// Which phase `content` was resolved for
    pub content_phase: AssetPhase,
    /// Host frame and center cached at `show`
    pub host: Option<HostGeometry>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            phase: LifecyclePhase::Idle,
            progress: None,
            title: String::new(),
            attached: false,
            circular_active: false,
            content: IndicatorContent::Spinner,
            content_phase: AssetPhase::Loading,
            host: None,
        }
    }
}

impl ProgressState {
    /// Reset for a fresh `show` on `host`
    pub fn prepare(&mut self, host: HostGeometry, title: &str, content: IndicatorContent) {
        self.host = Some(host);
        self.title = title.to_string();
        self.progress = None;
        self.content = content;
        self.content_phase = AssetPhase::Loading;
    }

    /// Record a progress report. The value is clamped; title, slider, arc
    /// and overlay alpha all derive from this single field.
    pub fn record_progress(&mut self, value: f32) {
        self.progress = Some(clamp_progress(value));
        if matches!(self.phase, LifecyclePhase::Shown | LifecyclePhase::Updating) {
            self.phase = LifecyclePhase::Updating;
        }
    }

    /// Attached and in a visible phase
    pub fn on_screen(&self) -> bool {
        self.attached && self.phase.is_visible()
    }

    pub fn set_result(&mut self, phase: AssetPhase, content: IndicatorContent) {
        self.content_phase = phase;
        self.content = content;
    }
}
