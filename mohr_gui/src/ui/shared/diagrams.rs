//! Canvas drawing for the two plots
//!
//! - [`MohrCircleDiagram`] - circle, given/rotated stress points, diameter,
//!   coordinate labels, legend and grid
//! - [`ElementRotationDiagram`] - original and rotated element outlines with
//!   the rotation caption

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{alignment, Color, Point, Rectangle, Renderer, Theme};

use mohr_core::calculations::mohr_circle::MohrCircleResult;
use mohr_core::calculations::square_rotation::{closed_outline, SquareRotationResult};

use crate::Message;
use super::plot::{nice_ticks, PlotArea, PlotBounds};

const RED: Color = Color { r: 0.85, g: 0.15, b: 0.15, a: 1.0 };
const BLUE: Color = Color { r: 0.15, g: 0.35, b: 0.85, a: 1.0 };
const GREEN: Color = Color { r: 0.1, g: 0.6, b: 0.2, a: 1.0 };
const PURPLE: Color = Color { r: 0.55, g: 0.2, b: 0.7, a: 1.0 };
const GRID: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 0.25 };

const MARKER_RADIUS: f32 = 3.5;

/// Canvas program for Mohr's circle
pub struct MohrCircleDiagram {
    result: MohrCircleResult,
    decimals: usize,
}

impl MohrCircleDiagram {
    pub fn new(result: MohrCircleResult, decimals: usize) -> Self {
        Self { result, decimals }
    }

    /// Axis limits: center ± radius as on a classic Mohr plot, with some
    /// room for labels, grown to keep every annotated point visible.
    fn plot_bounds(&self) -> PlotBounds {
        let circle = &self.result.circle;
        let mut bounds = PlotBounds::around_center(circle.center, circle.radius * 1.15);
        for annotation in self.result.annotations() {
            bounds.include(&annotation.point);
        }
        bounds
    }

    /// Series color for an annotation label
    fn color_for(label: &str) -> Color {
        if label.starts_with("Center") {
            RED
        } else if label.starts_with("Given") {
            BLUE
        } else if label.starts_with("Rotated") {
            GREEN
        } else {
            PURPLE
        }
    }

    fn draw_grid(&self, frame: &mut Frame, area: &PlotArea, text_color: Color) {
        let bounds = area.bounds();
        let (left, top, right, bottom) = area.screen_rect();
        let grid_stroke = || Stroke::default().with_color(GRID).with_width(1.0);

        for x in nice_ticks(bounds.x_min, bounds.x_max, 6) {
            let sx = area.to_screen(mohr_core::Point::new(x, bounds.y_min)).x;
            frame.stroke(&Path::line(Point::new(sx, top), Point::new(sx, bottom)), grid_stroke());
            frame.fill_text(Text {
                content: format_tick(x),
                position: Point::new(sx, bottom + 3.0),
                color: text_color,
                size: iced::Pixels(8.0),
                align_x: alignment::Horizontal::Center.into(),
                ..Text::default()
            });
        }

        for y in nice_ticks(bounds.y_min, bounds.y_max, 6) {
            let sy = area.to_screen(mohr_core::Point::new(bounds.x_min, y)).y;
            frame.stroke(&Path::line(Point::new(left, sy), Point::new(right, sy)), grid_stroke());
            frame.fill_text(Text {
                content: format_tick(y),
                position: Point::new(left - 3.0, sy - 4.0),
                color: text_color,
                size: iced::Pixels(8.0),
                align_x: alignment::Horizontal::Right.into(),
                ..Text::default()
            });
        }

        // Plot frame
        let border = Path::rectangle(Point::new(left, top), iced::Size::new(right - left, bottom - top));
        frame.stroke(&border, Stroke::default().with_color(text_color).with_width(1.0));

        // Axis labels
        frame.fill_text(Text {
            content: "X-axis".to_string(),
            position: Point::new((left + right) / 2.0, bottom + 14.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: alignment::Horizontal::Center.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: "Y-axis".to_string(),
            position: Point::new(left, top - 14.0),
            color: text_color,
            size: iced::Pixels(10.0),
            align_x: alignment::Horizontal::Center.into(),
            ..Text::default()
        });
    }

    fn draw_segments(&self, frame: &mut Frame, area: &PlotArea) {
        let r = &self.result;

        let given = Path::line(area.to_screen(r.given_points[0]), area.to_screen(r.given_points[1]));
        frame.stroke(&given, Stroke::default().with_color(BLUE).with_width(1.5));

        let rotated = Path::line(area.to_screen(r.rotated_points[0]), area.to_screen(r.rotated_points[1]));
        frame.stroke(&rotated, Stroke::default().with_color(GREEN).with_width(1.5));

        let diameter = Path::line(
            area.to_screen(r.diameter_endpoints[0]),
            area.to_screen(r.diameter_endpoints[1]),
        );
        let dashed = Stroke {
            line_dash: LineDash {
                segments: &[6.0, 4.0],
                offset: 0,
            },
            ..Stroke::default().with_color(PURPLE).with_width(1.5)
        };
        frame.stroke(&diameter, dashed);
    }

    fn draw_points(&self, frame: &mut Frame, area: &PlotArea, text_color: Color) {
        for annotation in self.result.annotations() {
            let position = area.to_screen(annotation.point);
            frame.fill(&Path::circle(position, MARKER_RADIUS), Self::color_for(annotation.label));

            // Rotated Point 1 is labelled on its left so it does not collide
            // with Given Point 1 at small angles
            let (offset_x, align): (f32, alignment::Horizontal) = if annotation.label == "Rotated Point 1" {
                (-5.0, alignment::Horizontal::Right)
            } else {
                (5.0, alignment::Horizontal::Left)
            };

            frame.fill_text(Text {
                content: format!("{:.*}", self.decimals, annotation.point),
                position: Point::new(position.x + offset_x, position.y + 3.0),
                color: text_color,
                size: iced::Pixels(8.0),
                align_x: align.into(),
                ..Text::default()
            });
        }
    }

    fn draw_legend(&self, frame: &mut Frame, area: &PlotArea, text_color: Color) {
        let (_, top, right, _) = area.screen_rect();
        let entries = self.result.annotations();
        draw_legend_box(
            frame,
            Point::new(right - 118.0, top + 6.0),
            entries.iter().map(|a| (a.label, Self::color_for(a.label))),
            text_color,
        );
    }
}

impl canvas::Program<Message> for MohrCircleDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let text_color = theme.palette().text;

        let area = PlotArea::fit(self.plot_bounds(), bounds.size(), 40.0);

        frame.fill_text(Text {
            content: "Mohr's Circle".to_string(),
            position: Point::new(bounds.width / 2.0, 6.0),
            color: text_color,
            size: iced::Pixels(13.0),
            align_x: alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        self.draw_grid(&mut frame, &area, text_color);

        let circle = Path::circle(area.to_screen(self.result.circle.center), area.length(self.result.circle.radius));
        frame.stroke(&circle, Stroke::default().with_color(RED).with_width(2.0));

        self.draw_segments(&mut frame, &area);
        self.draw_points(&mut frame, &area, text_color);
        self.draw_legend(&mut frame, &area, text_color);

        vec![frame.into_geometry()]
    }
}

/// Canvas program for the original and rotated element
pub struct ElementRotationDiagram {
    result: SquareRotationResult,
}

impl ElementRotationDiagram {
    pub fn new(result: SquareRotationResult) -> Self {
        Self { result }
    }

    fn draw_outline(&self, frame: &mut Frame, area: &PlotArea, vertices: &[mohr_core::Point], color: Color) {
        let outline = closed_outline(vertices);
        let path = Path::new(|builder| {
            for (i, vertex) in outline.iter().enumerate() {
                let p = area.to_screen(*vertex);
                if i == 0 {
                    builder.move_to(p);
                } else {
                    builder.line_to(p);
                }
            }
        });
        frame.stroke(&path, Stroke::default().with_color(color).with_width(2.0));

        for vertex in vertices {
            frame.fill(&Path::circle(area.to_screen(*vertex), MARKER_RADIUS), color);
        }
    }
}

impl canvas::Program<Message> for ElementRotationDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let text_color = theme.palette().text;

        let plot_bounds = PlotBounds::enclosing(
            self.result.original.iter().chain(&self.result.rotated),
            0.15,
        )
        .unwrap_or_else(|| PlotBounds::around_center(self.result.center, 1.0));

        // Leave the bottom strip for the caption
        let plot_size = iced::Size::new(bounds.width, (bounds.height - 30.0).max(1.0));
        let area = PlotArea::fit(plot_bounds, plot_size, 20.0);

        // Axes are hidden for this view
        self.draw_outline(&mut frame, &area, &self.result.original, text_color);
        self.draw_outline(&mut frame, &area, &self.result.rotated, GREEN);

        let (_, top, right, _) = area.screen_rect();
        draw_legend_box(
            &mut frame,
            Point::new(right - 100.0, top),
            [("Original Square", text_color), ("Rotated Square", GREEN)].into_iter(),
            text_color,
        );

        frame.fill_text(Text {
            content: self.result.caption(),
            position: Point::new(bounds.width / 2.0, bounds.height - 22.0),
            color: text_color,
            size: iced::Pixels(11.0),
            align_x: alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Legend: one colored marker and label per row, inside a thin box
fn draw_legend_box<'a>(
    frame: &mut Frame,
    origin: Point,
    entries: impl Iterator<Item = (&'a str, Color)>,
    border_color: Color,
) {
    let row_height = 11.0;
    let mut rows = 0;

    for (i, (label, color)) in entries.enumerate() {
        let y = origin.y + 6.0 + i as f32 * row_height;
        frame.fill(&Path::circle(Point::new(origin.x + 7.0, y + 4.0), 2.5), color);
        frame.fill_text(Text {
            content: label.to_string(),
            position: Point::new(origin.x + 14.0, y),
            color: border_color,
            size: iced::Pixels(7.0),
            ..Text::default()
        });
        rows += 1;
    }

    let size = iced::Size::new(110.0, 8.0 + rows as f32 * row_height);
    let border = Path::rectangle(origin, size);
    frame.stroke(
        &border,
        Stroke::default().with_color(Color { a: 0.4, ..border_color }).with_width(1.0),
    );
}

/// Tick label without trailing zeros ("20", "2.5", "0.25")
fn format_tick(value: f64) -> String {
    let text = format!("{:.3}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohr_core::calculations::mohr_circle::{calculate, MohrCircleInput, StressState};

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(0.25), "0.25");
    }

    #[test]
    fn test_mohr_bounds_cover_all_points() {
        let mut input = MohrCircleInput::new(StressState::new(100.0, 20.0, 30.0), 25.0);
        input.scaling_factor = 0.5;
        let result = calculate(&input).unwrap();
        let diagram = MohrCircleDiagram::new(result.clone(), 2);
        let bounds = diagram.plot_bounds();

        for a in result.annotations() {
            assert!(a.point.x >= bounds.x_min && a.point.x <= bounds.x_max, "{}", a.label);
            assert!(a.point.y >= bounds.y_min && a.point.y <= bounds.y_max, "{}", a.label);
        }
    }

    #[test]
    fn test_series_colors() {
        assert_eq!(MohrCircleDiagram::color_for("Center"), RED);
        assert_eq!(MohrCircleDiagram::color_for("Given Point 2"), BLUE);
        assert_eq!(MohrCircleDiagram::color_for("Rotated Point 1"), GREEN);
        assert_eq!(MohrCircleDiagram::color_for("Diameter Endpoint 1"), PURPLE);
    }
}
