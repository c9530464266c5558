//! Mapping from plot coordinates to canvas pixels
//!
//! Both diagrams use an equal-aspect plot: one unit on the x axis is the
//! same number of pixels as one unit on the y axis, so circles stay round
//! and squares stay square.

use iced::{Point, Size};

/// Visible region in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Extent used when the data has no spread in some direction
const MIN_HALF_EXTENT: f64 = 1.0;

impl PlotBounds {
    /// Square region of half-width `half_extent` around `center`
    pub fn around_center(center: mohr_core::Point, half_extent: f64) -> Self {
        let h = if half_extent > 0.0 { half_extent } else { MIN_HALF_EXTENT };
        PlotBounds {
            x_min: center.x - h,
            x_max: center.x + h,
            y_min: center.y - h,
            y_max: center.y + h,
        }
    }

    /// Smallest region holding every point, grown by `padding` (fraction of
    /// the larger side) on each side. `None` for an empty iterator.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a mohr_core::Point>, padding: f64) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = PlotBounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in iter {
            bounds.include(p);
        }

        let span = bounds.width().max(bounds.height());
        let pad = if span > 0.0 { span * padding } else { MIN_HALF_EXTENT };
        bounds.x_min -= pad;
        bounds.x_max += pad;
        bounds.y_min -= pad;
        bounds.y_max += pad;
        Some(bounds)
    }

    /// Grow to contain `point`
    pub fn include(&mut self, point: &mohr_core::Point) {
        self.x_min = self.x_min.min(point.x);
        self.x_max = self.x_max.max(point.x);
        self.y_min = self.y_min.min(point.y);
        self.y_max = self.y_max.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Equal-aspect placement of [`PlotBounds`] inside a canvas rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    bounds: PlotBounds,
    /// Pixels per plot unit
    scale: f32,
    /// Canvas position of (x_min, y_max)
    left: f32,
    top: f32,
}

impl PlotArea {
    /// Fit `bounds` into `size`, keeping `margin` pixels free on every side
    /// and centring the plot in the leftover space.
    pub fn fit(bounds: PlotBounds, size: Size, margin: f32) -> Self {
        let avail_w = (size.width - 2.0 * margin).max(1.0);
        let avail_h = (size.height - 2.0 * margin).max(1.0);
        let data_w = bounds.width().max(f64::EPSILON) as f32;
        let data_h = bounds.height().max(f64::EPSILON) as f32;

        let scale = (avail_w / data_w).min(avail_h / data_h);
        PlotArea {
            bounds,
            scale,
            left: margin + (avail_w - data_w * scale) / 2.0,
            top: margin + (avail_h - data_h * scale) / 2.0,
        }
    }

    /// Canvas position of a plot point (y grows upward in the plot)
    pub fn to_screen(&self, p: mohr_core::Point) -> Point {
        Point::new(
            self.left + ((p.x - self.bounds.x_min) as f32) * self.scale,
            self.top + ((self.bounds.y_max - p.y) as f32) * self.scale,
        )
    }

    /// Pixel length of `value` plot units
    pub fn length(&self, value: f64) -> f32 {
        value as f32 * self.scale
    }

    pub fn bounds(&self) -> &PlotBounds {
        &self.bounds
    }

    /// Canvas rectangle covered by the plot: (left, top, right, bottom)
    pub fn screen_rect(&self) -> (f32, f32, f32, f32) {
        (
            self.left,
            self.top,
            self.left + self.length(self.bounds.width()),
            self.top + self.length(self.bounds.height()),
        )
    }
}

/// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10ⁿ) covering
/// `[min, max]`, aiming for about `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 || target == 0 {
        return Vec::new();
    }

    let raw_step = range / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohr_core::Point as PlotPoint;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_fit_keeps_equal_aspect_and_centers() {
        // 100 wide, 50 tall into a 400x400 canvas with 10px margin
        let bounds = PlotBounds { x_min: 0.0, x_max: 100.0, y_min: -25.0, y_max: 25.0 };
        let area = PlotArea::fit(bounds, Size::new(400.0, 400.0), 10.0);

        assert!(close(area.to_screen(PlotPoint::new(0.0, 25.0)), Point::new(10.0, 105.0)));
        assert!(close(area.to_screen(PlotPoint::new(100.0, -25.0)), Point::new(390.0, 295.0)));
        assert!((area.length(10.0) - 38.0).abs() < 1e-3);
    }

    #[test]
    fn test_y_axis_points_up() {
        let area = PlotArea::fit(PlotBounds::around_center(PlotPoint::new(0.0, 0.0), 1.0), Size::new(100.0, 100.0), 0.0);
        let low = area.to_screen(PlotPoint::new(0.0, -1.0));
        let high = area.to_screen(PlotPoint::new(0.0, 1.0));
        assert!(high.y < low.y);
    }

    #[test]
    fn test_degenerate_bounds_get_extent() {
        let bounds = PlotBounds::around_center(PlotPoint::new(50.0, 0.0), 0.0);
        assert_eq!(bounds.width(), 2.0);

        let single = PlotBounds::enclosing(&[PlotPoint::new(3.0, 4.0)], 0.1).unwrap();
        assert_eq!(single.width(), 2.0);
        assert!(PlotBounds::enclosing(&[] as &[PlotPoint], 0.1).is_none());
    }

    #[test]
    fn test_enclosing_pads_by_larger_side() {
        let pts = [PlotPoint::new(0.0, 0.0), PlotPoint::new(10.0, 2.0)];
        let b = PlotBounds::enclosing(&pts, 0.1).unwrap();
        assert_eq!(b.x_min, -1.0);
        assert_eq!(b.x_max, 11.0);
        assert_eq!(b.y_min, -1.0);
        assert_eq!(b.y_max, 3.0);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(10.0, 110.0, 5), vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(-50.0, 50.0, 4), vec![-50.0, 0.0, 50.0]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }
}
