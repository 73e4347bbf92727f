//! Section header widget
//!
//! A bold group title with an optional muted caption underneath, used to
//! split the demo's control panel into groups.

use iced::widget::{column, text};
use iced::{Element, Font, font};

use crate::ui::theme;

pub fn view<'a, Message: 'a>(title: &'a str, caption: Option<&'a str>) -> Element<'a, Message> {
    let title_text = text(title)
        .size(15)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        });

    match caption {
        Some(caption) => column![
            title_text,
            text(caption).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .spacing(2)
        .into(),
        None => title_text.into(),
    }
}
