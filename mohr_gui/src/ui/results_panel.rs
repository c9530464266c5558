//! Results Panel (Right Side)
//!
//! Tab strip on top, then either the error from the last recalculation or
//! the selected result view.

use iced::widget::{button, column, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length, Padding};

use crate::{App, Message, ResultsTab};
use super::{result_mohr_circle, result_square_rotation};

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let body: Column<'_, Message> = match (&app.error_message, &app.report) {
        (Some(error), _) => column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ],
        (None, Some(report)) => match app.selected_tab {
            ResultsTab::MohrCircle => result_mohr_circle::view(&report.mohr_circle, &app.settings),
            ResultsTab::ElementRotation => result_square_rotation::view(&report.square_rotation, &app.settings),
        },
        (None, None) => column![text("Enter a stress state to see results").size(14).color([0.5, 0.5, 0.5])],
    };

    let content = column![view_tabs(app.selected_tab), Space::new().height(10), body];

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_tabs(selected: ResultsTab) -> Element<'static, Message> {
    let mut tabs = Row::new().spacing(4);
    for tab in ResultsTab::ALL {
        tabs = tabs.push(
            button(text(tab.display_name()).size(11))
                .on_press(Message::SelectTab(tab))
                .padding(Padding::from([4, 8]))
                .style(if tab == selected { button::primary } else { button::secondary }),
        );
    }
    tabs.into()
}
