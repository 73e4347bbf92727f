//! Demo view: control panel, with the HUD overlay and toast stacked on top

use iced::widget::{
    Space, button, checkbox, column, container, pick_list, row, slider, stack, text, text_input,
};
use iced::{Alignment, Element, Fill, Length, Padding};
use progress_hud::hud::{BackgroundStyle, BlurStyle, IndicatorType};
use progress_hud::ui::primitives::{HudOverlay, view_hud_overlay};
use progress_hud::ui::theme;
use progress_hud::ui::widgets::{section_header, view_toast};

use super::{App, Message};

const PANEL_WIDTH: f32 = 340.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let enabled = self.controls_enabled();

        let panel = container(
            column![
                self.view_options(enabled),
                self.view_job(enabled),
                self.view_actions(enabled),
            ]
            .spacing(24),
        )
        .padding(20)
        .width(Length::Fixed(PANEL_WIDTH))
        .style(theme::panel);

        let base = container(panel)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::main_content);

        // Keep drawing the last scene while the overlay fades out
        let scene = self.hud.scene().or_else(|| {
            (self.fade.opacity() > 0.0)
                .then(|| self.last_scene.clone())
                .flatten()
        });
        let overlay = view_hud_overlay(
            HudOverlay::new(scene)
                .opacity(self.fade.opacity())
                .elapsed(self.elapsed),
        );

        let toast_layer: Element<'_, Message> = match &self.toast {
            Some(toast) => {
                let toast_button = button(view_toast(toast))
                    .padding(0)
                    .style(|_theme, _status| button::Style::default())
                    .on_press(Message::DismissToast);

                container(toast_button)
                    .width(Fill)
                    .height(Fill)
                    .align_x(Alignment::Center)
                    .align_y(Alignment::End)
                    .padding(Padding::new(24.0))
                    .into()
            }
            None => Space::new().width(0).height(0).into(),
        };

        stack![base, overlay, toast_layer].into()
    }

    fn view_options(&self, enabled: bool) -> Element<'_, Message> {
        let config = &self.config;

        let indicator = pick_list(
            IndicatorType::all(),
            Some(config.indicator_type),
            move |choice| locked_or(enabled, Message::IndicatorTypeSelected(choice)),
        );
        let background = pick_list(
            BackgroundStyle::all(),
            Some(config.background_style),
            move |choice| locked_or(enabled, Message::BackgroundStyleSelected(choice)),
        );
        let background_blur = pick_list(
            BlurStyle::all(),
            Some(config.background_blur_style),
            move |choice| locked_or(enabled, Message::BackgroundBlurSelected(choice)),
        );
        let center_blur = pick_list(
            BlurStyle::all(),
            Some(config.center_blur_style),
            move |choice| locked_or(enabled, Message::CenterBlurSelected(choice)),
        );

        column![
            section_header::view("Appearance", Some("Applied to the next and current HUD")),
            labeled("Indicator", indicator.into()),
            labeled("Background", background.into()),
            labeled("Background blur", background_blur.into()),
            labeled("Panel blur", center_blur.into()),
            toggle("Percent in title", config.show_percent_label, enabled, Message::TogglePercentLabel),
            toggle("Progress slider", config.show_linear_slider, enabled, Message::ToggleLinearSlider),
            toggle(
                "Fade background with progress",
                config.dynamic_overlay_opacity,
                enabled,
                Message::ToggleDynamicOpacity,
            ),
            toggle("Center panel", config.show_center_panel, enabled, Message::ToggleCenterPanel),
            row![
                button(text("Save").size(13))
                    .on_press_maybe(enabled.then_some(Message::SaveConfig))
                    .style(theme::primary_button),
                button(text("Reload").size(13))
                    .on_press_maybe(enabled.then_some(Message::ReloadConfig))
                    .style(theme::primary_button),
            ]
            .spacing(8),
        ]
        .spacing(10)
        .into()
    }

    fn view_job(&self, enabled: bool) -> Element<'_, Message> {
        let delay_ms = self.dismiss_delay.as_millis() as f32;

        let title_input = text_input("Title", &self.task_title)
            .on_input_maybe(enabled.then_some(Message::TaskTitleChanged))
            .padding(8)
            .size(13);

        let delay = slider(0.0..=4000.0, delay_ms, move |ms| {
            locked_or(enabled, Message::DismissDelayChanged(ms))
        })
        .step(100.0)
        .width(Fill);

        column![
            section_header::view("Job", None),
            title_input,
            toggle("Block interaction", self.block_interaction, enabled, Message::ToggleBlockInteraction),
            toggle("End with failure", self.simulate_failure, enabled, Message::ToggleSimulateFailure),
            labeled(&format!("Dismiss after {} ms", delay_ms as u64), delay.into()),
        ]
        .spacing(10)
        .into()
    }

    /// HUD actions stay available while the host is locked
    fn view_actions(&self, enabled: bool) -> Element<'_, Message> {
        let running = self.job.is_some();
        let visible = self.hud.phase().is_visible();

        let status = match &self.job {
            Some(job) => format!("Running {:.0}%", job.progress * 100.0),
            None if self.dismiss_pending() => "Dismissing".to_string(),
            None if visible => "Idle, HUD up".to_string(),
            None => "Idle".to_string(),
        };

        column![
            row![
                button(text("Start").size(13))
                    .on_press_maybe(
                        (enabled && !running && !self.dismiss_pending())
                            .then_some(Message::StartJob)
                    )
                    .style(theme::primary_button),
                button(text("Fail").size(13))
                    .on_press_maybe(running.then_some(Message::FailJob))
                    .style(theme::primary_button),
                button(text("Keep open").size(13))
                    .on_press_maybe(self.dismiss_pending().then_some(Message::CancelDismiss))
                    .style(theme::primary_button),
                button(text("Close").size(13))
                    .on_press_maybe(
                        (visible && !running && !self.dismiss_pending())
                            .then_some(Message::CloseHud)
                    )
                    .style(theme::primary_button),
            ]
            .spacing(8),
            text(status).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .spacing(8)
        .into()
    }
}

fn locked_or(enabled: bool, message: Message) -> Message {
    if enabled { message } else { Message::Noop }
}

fn labeled<'a>(label: &str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![
        text(label.to_string()).size(13).width(Length::Fixed(130.0)),
        control,
    ]
    .align_y(Alignment::Center)
    .spacing(8)
    .into()
}

fn toggle<'a>(
    label: &'a str,
    value: bool,
    enabled: bool,
    on_toggle: fn(bool) -> Message,
) -> Element<'a, Message> {
    checkbox(value)
        .label(label)
        .on_toggle_maybe(enabled.then_some(on_toggle))
        .text_size(13)
        .spacing(8)
        .into()
}
