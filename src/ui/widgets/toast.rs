//! Toast notification widget
//!
//! Dark surface with a thin accent bar; reports how a HUD session ended.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::hud::DismissResult;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Info,
}

impl ToastStyle {
    /// Accent color (icon and bar only)
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(&iced::Theme::Dark),
            ToastStyle::Error => theme::danger(&iced::Theme::Dark),
            ToastStyle::Info => theme::info(&iced::Theme::Dark),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Info => "ℹ",
        }
    }
}

impl From<DismissResult> for ToastStyle {
    fn from(result: DismissResult) -> Self {
        match result {
            DismissResult::Success => ToastStyle::Success,
            DismissResult::Failure => ToastStyle::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    pub visible: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
            visible: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }

    /// Toast announcing that a HUD finished with `result`
    pub fn finished(result: DismissResult) -> Self {
        let message = match result {
            DismissResult::Success => "Task completed",
            DismissResult::Failure => "Task failed",
        };
        Self::new(message, result.into())
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    if !toast.visible {
        return Space::new().width(0).height(0).into();
    }

    let accent_color = toast.style.accent_color();

    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        text(toast.style.icon()).size(14).color(accent_color),
        Space::new().width(10),
        text(toast.message.clone()).size(13).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_toast_follows_result() {
        assert_eq!(Toast::finished(DismissResult::Success).style, ToastStyle::Success);
        assert_eq!(Toast::finished(DismissResult::Failure).style, ToastStyle::Error);
    }

    #[test]
    fn test_hide() {
        let mut toast = Toast::info("Saved");
        toast.hide();
        assert!(!toast.visible);
    }
}
