//! Toolbar component
//!
//! Contains the JSON export action and the light/dark theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with title (owned)
pub fn view_header_owned(window_title: String) -> Element<'static, Message> {
    row![
        text("Mohr").size(28),
        Space::new().width(Length::Fill),
        text(window_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar. Export is disabled while there is no report.
pub fn view_toolbar(dark_mode: bool, can_export: bool) -> Element<'static, Message> {
    let export_button = button(text("Export JSON").size(11))
        .on_press_maybe(can_export.then_some(Message::ExportJson))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        export_button,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
