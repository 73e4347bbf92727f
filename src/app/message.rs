//! Application messages

use std::time::Instant;

use progress_hud::hud::{BackgroundStyle, BlurStyle, IndicatorType};

#[derive(Debug, Clone)]
pub enum Message {
    /// Swallows input from locked controls
    Noop,

    // ============ HUD options ============
    IndicatorTypeSelected(IndicatorType),
    BackgroundStyleSelected(BackgroundStyle),
    BackgroundBlurSelected(BlurStyle),
    CenterBlurSelected(BlurStyle),
    TogglePercentLabel(bool),
    ToggleLinearSlider(bool),
    ToggleDynamicOpacity(bool),
    ToggleCenterPanel(bool),
    SaveConfig,
    ReloadConfig,

    // ============ Job ============
    TaskTitleChanged(String),
    ToggleBlockInteraction(bool),
    ToggleSimulateFailure(bool),
    DismissDelayChanged(f32),
    /// Show the HUD and start reporting progress
    StartJob,
    /// Stop the job and dismiss with a failure
    FailJob,
    /// Keep the HUD up instead of removing it
    CancelDismiss,
    /// Dismiss a HUD that is up without a job
    CloseHud,
    JobTick,

    // ============ Window ============
    Frame(Instant),
    WindowResized(iced::Size),
    DismissToast,
}
