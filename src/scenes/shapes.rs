use crate::core::TAU;
use crate::surface::Point;

/// Segments used to approximate a circle outline.
const CIRCLE_SEGMENTS: usize = 32;

/// Outline families used by the scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Circle,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Circle, ShapeKind::Hexagon];

    /// Closed outline of size `size` centered on the origin, offset by `offset`.
    pub fn outline(self, size: f64, offset: Point) -> Vec<Point> {
        match self {
            ShapeKind::Triangle => vec![
                Point::new(offset.x, offset.y - size),
                Point::new(offset.x + size, offset.y + size),
                Point::new(offset.x - size, offset.y + size),
            ],
            ShapeKind::Circle => regular_polygon(CIRCLE_SEGMENTS, size, size, offset),
            ShapeKind::Hexagon => regular_polygon(6, size, size, offset),
        }
    }
}

/// Vertices of a regular polygon with independent horizontal and vertical radii.
/// The first vertex sits on the positive x axis.
pub(crate) fn regular_polygon(sides: usize, radius_x: f64, radius_y: f64, offset: Point) -> Vec<Point> {
    (0..sides)
        .map(|j| {
            let angle = j as f64 / sides as f64 * TAU;
            Point::new(offset.x + angle.cos() * radius_x, offset.y + angle.sin() * radius_y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines_have_expected_vertex_counts() {
        let origin = Point::default();
        assert_eq!(ShapeKind::Triangle.outline(10.0, origin).len(), 3);
        assert_eq!(ShapeKind::Hexagon.outline(10.0, origin).len(), 6);
        assert_eq!(ShapeKind::Circle.outline(10.0, origin).len(), CIRCLE_SEGMENTS);
    }

    #[test]
    fn hexagon_vertices_sit_on_the_radius() {
        for p in ShapeKind::Hexagon.outline(40.0, Point::new(1.0, 1.0)) {
            let r = ((p.x - 1.0).powi(2) + (p.y - 1.0).powi(2)).sqrt();
            assert!((r - 40.0).abs() < 1e-9);
        }
    }
}
