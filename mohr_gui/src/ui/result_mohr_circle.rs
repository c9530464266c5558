//! Results view for Mohr's circle
//!
//! Shows the circle, every annotated point, the principal stresses and the
//! circle diagram.

use iced::widget::{column, text, Canvas, Column, Space};
use iced::{Element, Length};

use mohr_core::calculations::mohr_circle::MohrCircleResult;
use mohr_core::Settings;

use crate::Message;
use super::shared::diagrams::MohrCircleDiagram;

pub fn view<'a>(result: &'a MohrCircleResult, settings: &'a Settings) -> Column<'a, Message> {
    let diagram = MohrCircleDiagram::new(result.clone(), settings.decimals);
    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(460.0))
        .into();

    view_values(result, settings)
        .push(Space::new().height(15))
        .push(text("Diagram").size(14))
        .push(Space::new().height(8))
        .push(canvas_widget)
}

fn view_values<'a>(result: &'a MohrCircleResult, settings: &'a Settings) -> Column<'a, Message> {
    let stress = |v: f64| settings.format_stress(v);

    let mut points = Column::new().spacing(2);
    for annotation in result.annotations() {
        points = points.push(
            text(format!("{}: {}", annotation.label, settings.format_point(&annotation.point))).size(11),
        );
    }

    column![
        text("Mohr's Circle").size(14),
        Space::new().height(8),
        text(format!("Center: {}", settings.format_point(&result.circle.center))).size(11),
        text(format!("Radius: {}", stress(result.circle.radius))).size(11),
        text(format!(
            "Element rotation θ = {} deg, circle rotation 2θ = {} deg",
            result.angle_deg,
            result.circle_rotation_deg()
        ))
        .size(11),
        Space::new().height(12),
        text("Points").size(12),
        points,
        Space::new().height(12),
        text("Principal Stresses").size(12),
        text(format!("σ1 = {}", stress(result.principal.sigma_1))).size(11),
        text(format!("σ2 = {}", stress(result.principal.sigma_2))).size(11),
        text(format!("τmax = {}", stress(result.principal.max_shear))).size(11),
        text(format!("θp = {:.*} deg", settings.decimals, result.principal.principal_angle_deg)).size(11),
    ]
}
