//! Polygon geometry: rotation about the centroid, area-weighted centroid
//! and crossing-number containment.
//!
//! Not used by the brick game itself; kept as a standalone utility.

use std::fmt;

use glam::DVec2;

/// Real-valued 2D coordinate
pub type Vector2 = DVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices
    TooFewPoints(usize),
    /// All vertices are collinear (or coincident), so the centroid is undefined
    ZeroArea,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints(n) => {
                write!(f, "polygon needs at least 3 points, got {}", n)
            }
            GeometryError::ZeroArea => write!(f, "polygon has zero area"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// A shape with a world offset and a rotation in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Local vertices, shifted so the minimum x and y are both zero
    shape: Vec<Vector2>,
    pub position: Vector2,
    pub rotation: f64,
}

impl Polygon {
    /// Copies `shape` and normalizes it to its own top-left corner.
    pub fn new(shape: &[Vector2], position: Vector2, rotation: f64) -> Result<Self, GeometryError> {
        if shape.len() < 3 {
            return Err(GeometryError::TooFewPoints(shape.len()));
        }

        let origin = shape.iter().fold(shape[0], |acc, p| acc.min(*p));
        let shape: Vec<Vector2> = shape.iter().map(|p| *p - origin).collect();

        if shoelace_sum(&shape) == 0.0 {
            return Err(GeometryError::ZeroArea);
        }

        Ok(Self {
            shape,
            position,
            rotation,
        })
    }

    /// Local (normalized) vertices
    pub fn shape(&self) -> &[Vector2] {
        &self.shape
    }

    /// World-space vertices.
    ///
    /// Each point is rotated about the centroid, then offset by half the
    /// centroid plus `position`. The half-centroid offset is part of the
    /// established contract and is kept as-is.
    pub fn transform(&self) -> Vec<Vector2> {
        let center = self.centroid();
        let rot = DVec2::from_angle(self.rotation.to_radians());
        self.shape
            .iter()
            .map(|p| rot.rotate(*p - center) + center / 2.0 + self.position)
            .collect()
    }

    /// Area-weighted centroid of the local shape
    pub fn centroid(&self) -> Vector2 {
        let mut sum = Vector2::ZERO;
        for (a, b) in edges(&self.shape) {
            let cross = a.perp_dot(b);
            sum += (a + b) * cross;
        }
        (sum / (6.0 * self.area())).abs()
    }

    /// Unsigned area (shoelace formula)
    pub fn area(&self) -> f64 {
        (shoelace_sum(&self.shape) / 2.0).abs()
    }

    /// Crossing-number test against the world-space vertices.
    ///
    /// Edges are half-open in x and the point must lie strictly above the
    /// edge in y. Vertical edges never count as a crossing. For an
    /// axis-aligned box this puts the min-x and min-y sides outside and the
    /// max-x and max-y sides inside.
    pub fn contains(&self, point: Vector2) -> bool {
        let points = self.transform();
        let mut crossings = 0usize;
        for (a, b) in edges(&points) {
            if a.x == b.x {
                continue;
            }
            let straddles = (a.x < point.x && point.x <= b.x) || (b.x < point.x && point.x <= a.x);
            if straddles {
                let edge_y = a.y + (b.y - a.y) / (b.x - a.x) * (point.x - a.x);
                if point.y > edge_y {
                    crossings += 1;
                }
            }
        }
        crossings % 2 == 1
    }

    /// Adds `degrees` to the rotation, wrapped with `%` (the sign of the
    /// result follows the sign of the sum, so -90 stays -90).
    pub fn rotate(&mut self, degrees: f64) {
        self.rotation = (self.rotation + degrees) % 360.0;
    }
}

/// Consecutive vertex pairs, wrapping from the last vertex to the first
fn edges(points: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

fn shoelace_sum(points: &[Vector2]) -> f64 {
    edges(points).map(|(a, b)| a.perp_dot(b)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn square(size: f64) -> Vec<Vector2> {
        vec![v(0.0, 0.0), v(size, 0.0), v(size, size), v(0.0, size)]
    }

    /// Unit square whose world vertices sit at +/-0.5 around the origin.
    /// With rotation 0 a vertex lands at `p - centroid / 2 + position`.
    fn centered_unit_square() -> Polygon {
        Polygon::new(&square(1.0), v(-0.25, -0.25), 0.0).unwrap()
    }

    fn assert_points_eq(a: &[Vector2], b: &[Vector2]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!(p.abs_diff_eq(*q, 1e-6), "{:?} != {:?}", p, q);
        }
    }

    #[test]
    fn test_shape_is_normalized_and_copied() {
        let input = vec![v(10.0, 20.0), v(15.0, 20.0), v(15.0, 26.0)];
        let poly = Polygon::new(&input, Vector2::ZERO, 0.0).unwrap();
        assert_eq!(poly.shape(), &[v(0.0, 0.0), v(5.0, 0.0), v(5.0, 6.0)]);
        // Caller's points are untouched
        assert_eq!(input[0], v(10.0, 20.0));
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(1.0, 1.0)], Vector2::ZERO, 0.0),
            Err(GeometryError::TooFewPoints(2))
        );
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)], Vector2::ZERO, 0.0),
            Err(GeometryError::ZeroArea)
        );
    }

    #[test]
    fn test_accepts_tiny_triangle() {
        let poly = Polygon::new(&[v(0.0, 0.0), v(1e-8, 0.0), v(0.0, 1e-8)], Vector2::ZERO, 0.0).unwrap();
        assert!(poly.area() > 0.0);
        assert!(poly.centroid().abs_diff_eq(v(1e-8 / 3.0, 1e-8 / 3.0), 1e-20));
    }

    #[test]
    fn test_centroid_of_square() {
        let poly = Polygon::new(&square(4.0), Vector2::ZERO, 0.0).unwrap();
        assert!(poly.centroid().abs_diff_eq(v(2.0, 2.0), EPS));
        assert!((poly.area() - 16.0).abs() < EPS);
    }

    #[test]
    fn test_centroid_ignores_winding() {
        let mut cw = square(4.0);
        cw.reverse();
        let poly = Polygon::new(&cw, Vector2::ZERO, 0.0).unwrap();
        assert!(poly.centroid().abs_diff_eq(v(2.0, 2.0), EPS));
    }

    #[test]
    fn test_centroid_of_right_triangle() {
        let poly = Polygon::new(&[v(0.0, 0.0), v(6.0, 0.0), v(0.0, 3.0)], Vector2::ZERO, 0.0).unwrap();
        assert!(poly.centroid().abs_diff_eq(v(2.0, 1.0), EPS));
    }

    #[test]
    fn test_transform_applies_half_centroid_offset() {
        let poly = Polygon::new(&square(4.0), v(100.0, 50.0), 0.0).unwrap();
        // p - (2, 2) + (1, 1) + (100, 50)
        assert_points_eq(
            &poly.transform(),
            &[v(99.0, 49.0), v(103.0, 49.0), v(103.0, 53.0), v(99.0, 53.0)],
        );
    }

    #[test]
    fn test_transform_quarter_turn() {
        let poly = Polygon::new(&square(2.0), Vector2::ZERO, 90.0).unwrap();
        // (0,0) - (1,1) turned by 90 degrees is (1,-1); then + (0.5, 0.5)
        let points = poly.transform();
        assert!(points[0].abs_diff_eq(v(1.5, -0.5), 1e-9));
    }

    #[test]
    fn test_rotate_wraps() {
        let mut poly = centered_unit_square();
        poly.rotate(270.0);
        poly.rotate(180.0);
        assert!((poly.rotation - 90.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_negative_keeps_sign() {
        let mut poly = centered_unit_square();
        poly.rotate(-90.0);
        assert!((poly.rotation + 90.0).abs() < EPS);
        poly.rotate(-300.0);
        assert!((poly.rotation + 30.0).abs() < EPS);
    }

    #[test]
    fn test_contains_center_and_far_point() {
        let poly = centered_unit_square();
        assert!(poly.contains(v(0.0, 0.0)));
        assert!(!poly.contains(v(10.0, 10.0)));
        assert!(!poly.contains(v(-10.0, 0.0)));
    }

    #[test]
    fn test_contains_max_edges_inclusive() {
        let poly = centered_unit_square();
        assert!(poly.contains(v(0.5, 0.0)));
        assert!(poly.contains(v(0.0, 0.5)));
    }

    #[test]
    fn test_contains_min_edges_exclusive() {
        let poly = centered_unit_square();
        assert!(!poly.contains(v(-0.5, 0.0)));
        assert!(!poly.contains(v(0.0, -0.5)));
    }

    #[test]
    fn test_contains_with_vertical_edges_aligned_to_point() {
        // Both vertical edges share x with the probe; none may divide by zero
        let poly = centered_unit_square();
        assert!(!poly.contains(v(-0.5, -10.0)));
        assert!(!poly.contains(v(-0.5, 10.0)));
    }

    #[test]
    fn test_contains_concave() {
        // U shape opening upward (+y)
        let shape = [
            v(0.0, 0.0),
            v(3.0, 0.0),
            v(3.0, 3.0),
            v(2.0, 3.0),
            v(2.0, 1.0),
            v(1.0, 1.0),
            v(1.0, 3.0),
            v(0.0, 3.0),
        ];
        let poly = Polygon::new(&shape, Vector2::ZERO, 0.0).unwrap();
        let offset = poly.centroid() / 2.0;
        // Inside the left arm
        assert!(poly.contains(v(0.5, 2.0) - offset));
        // Inside the notch
        assert!(!poly.contains(v(1.5, 2.0) - offset));
        // Bottom bar
        assert!(poly.contains(v(1.5, 0.5) - offset));
    }

    #[test]
    fn test_contains_follows_rotation() {
        // Tall thin rectangle; a point beside it falls inside after a quarter turn
        let mut poly = Polygon::new(
            &[v(0.0, 0.0), v(2.0, 0.0), v(2.0, 10.0), v(0.0, 10.0)],
            Vector2::ZERO,
            0.0,
        )
        .unwrap();
        // The centroid lands on centroid / 2 + position in world space
        let pivot = poly.centroid() / 2.0 + poly.position;
        let probe = pivot + v(4.0, 0.0);
        assert!(!poly.contains(probe));
        poly.rotate(90.0);
        assert!(poly.contains(probe));
    }

    proptest! {
        #[test]
        fn prop_full_turn_round_trips(steps in prop::collection::vec(-720i32..720, 0..12)) {
            let mut poly = Polygon::new(&square(3.0), v(40.0, 25.0), 0.0).unwrap();
            let before = poly.transform();

            let total: i32 = steps.iter().sum();
            for step in &steps {
                poly.rotate(*step as f64);
            }
            // Finish the turn so the net rotation is a multiple of 360
            poly.rotate((360 - total.rem_euclid(360)) as f64);

            let after = poly.transform();
            for (p, q) in before.iter().zip(&after) {
                prop_assert!(p.abs_diff_eq(*q, 1e-6));
            }
        }

        #[test]
        fn prop_rotation_stays_below_full_turn(steps in prop::collection::vec(-1000.0f64..1000.0, 1..20)) {
            let mut poly = centered_unit_square();
            for step in steps {
                poly.rotate(step);
                prop_assert!(poly.rotation.abs() < 360.0);
            }
        }
    }
}
