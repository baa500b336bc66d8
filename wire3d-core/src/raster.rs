/// Line and wireframe triangle rasterization by linear interpolation
use std::mem;

use crate::canvas::Canvas;
use crate::geometry::Color;
use crate::projection::Point;

/// Dependent values sampled at each integer step of an independent variable.
///
/// Produced by [`interpolate`]. The sequence is lazy and can also be sampled
/// at an arbitrary step with [`Interpolation::value_at`].
#[derive(Debug, Clone)]
pub struct Interpolation {
    d0: f32,
    d1: f32,
    slope: f32,
    /// Step at which the sequence reaches `d1`
    last: Option<usize>,
    step: usize,
    len: usize,
}

impl Interpolation {
    /// Value at `step` units past the start, whether or not it is inside the sequence
    pub fn value_at(&self, step: usize) -> f32 {
        if self.last == Some(step) {
            return self.d1;
        }
        self.d0 + self.slope * step as f32
    }
}

impl Iterator for Interpolation {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.step >= self.len {
            return None;
        }
        let value = self.value_at(self.step);
        self.step += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Interpolation {}

/// Interpolate `d` from `d0` at `i0` to `d1` at `i1`, one value per integer `i` in `i0..=i1`.
///
/// When `i0 == i1` the result is the single value `d0`. When `i0 > i1` it is empty.
pub fn interpolate(i0: i32, d0: f32, i1: i32, d1: f32) -> Interpolation {
    if i0 == i1 {
        return Interpolation {
            d0,
            d1: d0,
            slope: 0.0,
            last: Some(0),
            step: 0,
            len: 1,
        };
    }

    let span = i1 as i64 - i0 as i64;
    Interpolation {
        d0,
        d1,
        slope: (d1 - d0) / span as f32,
        last: usize::try_from(span).ok(),
        step: 0,
        len: if span > 0 { span as usize + 1 } else { 0 },
    }
}

/// Draw a line by stepping one pixel at a time along its dominant axis
pub fn draw_line<C: Canvas + ?Sized>(canvas: &mut C, mut p0: Point, mut p1: Point, color: Color) {
    let dx = p1.x as i64 - p0.x as i64;
    let dy = p1.y as i64 - p0.y as i64;

    if dx.abs() >= dy.abs() {
        // Horizontal-ish, left to right
        if dx < 0 {
            mem::swap(&mut p0, &mut p1);
        }
        let ys = interpolate(p0.x, p0.y as f32, p1.x, p1.y as f32);

        // Columns off the canvas would be dropped by the sink anyway.
        // The minor axis truncates toward zero.
        let visible = canvas.x_range();
        for x in p0.x.max(*visible.start())..=p1.x.min(*visible.end()) {
            let y = ys.value_at((x as i64 - p0.x as i64) as usize);
            canvas.put_pixel(x, y as i32, color);
        }
    } else {
        // Vertical-ish, bottom to top
        if dy < 0 {
            mem::swap(&mut p0, &mut p1);
        }
        let xs = interpolate(p0.y, p0.x as f32, p1.y, p1.x as f32);

        let visible = canvas.y_range();
        for y in p0.y.max(*visible.start())..=p1.y.min(*visible.end()) {
            let x = xs.value_at((y as i64 - p0.y as i64) as usize);
            canvas.put_pixel(x as i32, y, color);
        }
    }
}

/// Draw the three edges of a triangle, without fill
pub fn draw_wireframe_triangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    p0: Point,
    p1: Point,
    p2: Point,
    color: Color,
) {
    draw_line(canvas, p0, p1, color);
    draw_line(canvas, p1, p2, color);
    draw_line(canvas, p0, p2, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelBuffer;
    use std::collections::BTreeSet;

    fn lit_by_line(p0: Point, p1: Point) -> BTreeSet<(i32, i32)> {
        let mut buffer = PixelBuffer::new(200, 200);
        draw_line(&mut buffer, p0, p1, Color::BLACK);
        buffer.lit_pixels()
    }

    #[test]
    fn test_interpolate_degenerate() {
        for (i, d) in [(0, 3.5), (-7, 0.0), (42, -1.25)] {
            let values: Vec<f32> = interpolate(i, d, i, d + 100.0).collect();
            assert_eq!(values, vec![d]);
        }
    }

    #[test]
    fn test_interpolate_endpoints_and_steps() {
        let cases = [(0, 0.0, 10, 5.0), (-3, 10.0, 4, -4.0), (5, 1.0, 6, 2.0), (-100, 0.0, 100, 33.0)];
        for (i0, d0, i1, d1) in cases {
            let values: Vec<f32> = interpolate(i0, d0, i1, d1).collect();
            assert_eq!(values.len(), (i1 - i0 + 1) as usize);
            assert!((values[0] - d0).abs() < 1e-5);
            assert!((values[values.len() - 1] - d1).abs() < 1e-4);

            let step = values[1] - values[0];
            for pair in values.windows(2) {
                assert!((pair[1] - pair[0] - step).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_interpolate_is_deterministic() {
        let a: Vec<f32> = interpolate(-20, 3.0, 17, -9.0).collect();
        let b: Vec<f32> = interpolate(-20, 3.0, 17, -9.0).collect();
        assert_eq!(a, b);
        assert_eq!(interpolate(-20, 3.0, 17, -9.0).len(), 38);
    }

    #[test]
    fn test_interpolate_reversed_is_empty() {
        assert_eq!(interpolate(5, 0.0, 2, 1.0).count(), 0);
    }

    #[test]
    fn test_horizontal_line() {
        let lit = lit_by_line(Point::new(-5, 3), Point::new(5, 3));
        assert_eq!(lit.len(), 11);
        assert!(lit.iter().all(|&(_, y)| y == 3));
    }

    #[test]
    fn test_steep_line_has_no_gaps() {
        let lit = lit_by_line(Point::new(2, -40), Point::new(-9, 60));
        assert_eq!(lit.len(), 101);
        let rows: BTreeSet<i32> = lit.iter().map(|&(_, y)| y).collect();
        assert_eq!(rows, (-40..=60).collect());
        assert!(lit.contains(&(2, -40)));
        assert!(lit.contains(&(-9, 60)));
    }

    #[test]
    fn test_shallow_line_has_no_gaps() {
        let lit = lit_by_line(Point::new(-70, -10), Point::new(80, 25));
        let columns: BTreeSet<i32> = lit.iter().map(|&(x, _)| x).collect();
        assert_eq!(columns, (-70..=80).collect());
        assert!(lit.contains(&(-70, -10)));
        assert!(lit.contains(&(80, 25)));
    }

    #[test]
    fn test_minor_axis_truncates() {
        let lit = lit_by_line(Point::new(0, 0), Point::new(10, 3));
        let expected: BTreeSet<(i32, i32)> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 1),
            (5, 1),
            (6, 1),
            (7, 2),
            (8, 2),
            (9, 2),
            (10, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(lit, expected);

        // Negative values truncate toward zero, not down
        let lit = lit_by_line(Point::new(0, 0), Point::new(-3, -10));
        assert!(lit.contains(&(0, -1)));
        assert!(lit.contains(&(-2, -7)));
        assert!(lit.contains(&(-3, -10)));
    }

    #[test]
    fn test_interpolate_hits_end_exactly() {
        let values: Vec<f32> = interpolate(2, 2.0, 102, -9.0).collect();
        assert_eq!(values[values.len() - 1], -9.0);
        assert_eq!(interpolate(0, 0.1, 7, 0.8).value_at(7), 0.8);
    }

    #[test]
    fn test_line_symmetry() {
        let pairs = [
            (Point::new(-50, -20), Point::new(60, 10)),
            (Point::new(0, 0), Point::new(3, 90)),
            (Point::new(10, 10), Point::new(-10, -10)),
            (Point::new(-30, 40), Point::new(25, -35)),
            (Point::new(7, 7), Point::new(7, 7)),
        ];
        for (p0, p1) in pairs {
            assert_eq!(lit_by_line(p0, p1), lit_by_line(p1, p0));
        }
    }

    #[test]
    fn test_single_point_line() {
        let lit = lit_by_line(Point::new(4, -4), Point::new(4, -4));
        assert_eq!(lit.into_iter().collect::<Vec<_>>(), vec![(4, -4)]);
    }

    #[test]
    fn test_far_endpoint_is_clipped() {
        // Degenerate projections saturate to the i32 limits
        let lit = lit_by_line(Point::new(0, 0), Point::new(i32::MAX, 0));
        assert_eq!(lit.len(), 100);

        let lit = lit_by_line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
        assert!(lit.len() <= 200);
    }

    #[test]
    fn test_wireframe_triangle() {
        let (p0, p1, p2) = (Point::new(-40, -30), Point::new(50, -10), Point::new(0, 60));
        let mut buffer = PixelBuffer::new(200, 200);
        draw_wireframe_triangle(&mut buffer, p0, p1, p2, Color::BLUE);

        let mut expected = lit_by_line(p0, p1);
        expected.extend(lit_by_line(p1, p2));
        expected.extend(lit_by_line(p0, p2));
        assert_eq!(buffer.lit_pixels(), expected);

        for p in [p0, p1, p2] {
            assert_eq!(buffer.pixel(p.x, p.y), Some(Color::BLUE));
        }
        // Interior stays empty
        assert_eq!(buffer.pixel(0, 0), Some(Color::WHITE));
    }
}
