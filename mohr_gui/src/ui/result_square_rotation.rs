//! Results view for the rotated element

use iced::widget::{column, row, text, Canvas, Column, Space};
use iced::{Element, Length};

use mohr_core::calculations::square_rotation::SquareRotationResult;
use mohr_core::Settings;

use crate::Message;
use super::shared::diagrams::ElementRotationDiagram;

pub fn view<'a>(result: &'a SquareRotationResult, settings: &'a Settings) -> Column<'a, Message> {
    let canvas_widget: Element<'_, Message> = Canvas::new(ElementRotationDiagram::new(result.clone()))
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .into();

    let mut table = Column::new().spacing(2).push(
        row![
            text("Vertex").size(11).width(Length::Fixed(60.0)),
            text("Original").size(11).width(Length::Fixed(140.0)),
            text("Rotated").size(11),
        ],
    );
    for (i, (original, rotated)) in result.original.iter().zip(&result.rotated).enumerate() {
        table = table.push(row![
            text(format!("{}", i + 1)).size(11).width(Length::Fixed(60.0)),
            text(settings.format_point(original)).size(11).width(Length::Fixed(140.0)),
            text(settings.format_point(rotated)).size(11),
        ]);
    }

    column![
        text("Element Rotation").size(14),
        Space::new().height(8),
        text(result.caption()).size(11),
        text(format!("Center: {}", settings.format_point(&result.center))).size(11),
        Space::new().height(12),
        table,
        Space::new().height(15),
        canvas_widget,
    ]
}
