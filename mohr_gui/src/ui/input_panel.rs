//! Input Panel (Left)
//!
//! One text field per stress component plus the element angle, and a
//! stress unit selector used when formatting results.

use iced::widget::{column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use mohr_core::input::ScalarField;
use mohr_core::units::StressUnit;

use crate::{App, Message};

/// Render the input panel
///
/// The `ratio` parameter is this panel's share of the window width.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let mut fields = Column::new().spacing(6);
    for field in ScalarField::ALL {
        fields = fields.push(labeled_input(field, app.input(field)));
    }

    let unit_row = row![
        text("Stress unit").size(11).width(Length::Fixed(80.0)),
        pick_list(
            &StressUnit::ALL[..],
            Some(app.settings.stress_unit),
            Message::StressUnitSelected
        )
        .text_size(11)
        .width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let panel = column![
        text("Stress State").size(14),
        Space::new().height(8),
        fields,
        Space::new().height(12),
        text("Display").size(14),
        Space::new().height(8),
        unit_row,
        Space::new().height(12),
        text("Positive angles rotate the element anticlockwise.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ];

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn labeled_input(field: ScalarField, value: &str) -> Element<'_, Message> {
    row![
        text(field.display_name()).size(11).width(Length::Fixed(80.0)),
        text_input("", value)
            .on_input(move |s| Message::InputChanged(field, s))
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
