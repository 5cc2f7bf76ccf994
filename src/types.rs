use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use glam::DVec2;
use thiserror::Error;

/// The float type used in the geometric computations
pub type Float = f64;

/// Tolerance shared by the approximate geometric predicates
pub const PREDICATE_EPSILON: Float = 1e-8;

/// Number of straight segments used to discretize a circle boundary in WKT output
pub const CIRCLE_WKT_SEGMENTS: usize = 400;

/// The three vertices are collinear, no circumcircle passes through them
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("triangle vertices are collinear, no circumcircle exists")]
pub struct NoCircumcircle;

/// A 2d point, immutable after construction
#[derive(Debug, Copy, Clone)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    #[inline]
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(self, other: Point) -> Float {
        DVec2::from(self).distance(other.into())
    }

    pub fn as_wkt(&self) -> String {
        format!("POINT({} {})", self.x, self.y)
    }
}

// Bit-pattern equality, no tolerance. Keeps Eq and Hash consistent so points
// can key hashed collections during deduplication.
impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(point: Point) -> DVec2 {
        DVec2::new(point.x, point.y)
    }
}
impl From<DVec2> for Point {
    #[inline]
    fn from(vector: DVec2) -> Point {
        Point::new(vector.x, vector.y)
    }
}

/// A circle defined by its center and radius.
///
/// Derived value, not mutated after construction. Radius is non-negative in
/// well-formed circles (not explicitly validated).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: Float,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: Float) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn area(&self) -> Float {
        PI * self.radius * self.radius
    }

    #[inline]
    pub fn perimeter(&self) -> Float {
        2. * PI * self.radius
    }

    /// Returns `true` when the circle covers `point`.
    ///
    /// Points up to [`PREDICATE_EPSILON`] outside the boundary still count as
    /// covered. The tolerance only widens the circle outward, never shrinks it.
    pub fn covers(&self, point: Point) -> bool {
        let distance = self.center.distance(point);
        self.radius > distance || distance - self.radius <= PREDICATE_EPSILON
    }

    /// WKT of this circle, discretizing the boundary into
    /// [`CIRCLE_WKT_SEGMENTS`] straight segments. The ring is closed by
    /// repeating the first vertex.
    pub fn as_wkt(&self) -> String {
        let step = 2. * PI / CIRCLE_WKT_SEGMENTS as Float;
        let mut coordinates = Vec::with_capacity(CIRCLE_WKT_SEGMENTS + 1);
        for segment in 0..CIRCLE_WKT_SEGMENTS {
            let angle = segment as Float * step;
            coordinates.push(format!(
                "{} {}",
                self.center.x + angle.cos() * self.radius,
                self.center.y + angle.sin() * self.radius
            ));
        }
        coordinates.push(coordinates[0].clone());
        format!("POLYGON(({}))", coordinates.join(", "))
    }
}

/// A triangle defined by its three vertices.
///
/// Immutable after construction. The vertex order does not affect the
/// area/perimeter/containment semantics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Triangle {
    #[inline]
    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self { p0, p1, p2 }
    }

    #[inline]
    fn side_lengths(&self) -> (Float, Float, Float) {
        (
            self.p0.distance(self.p1),
            self.p1.distance(self.p2),
            self.p2.distance(self.p0),
        )
    }

    /// Area of this triangle, using Heron's formula.
    ///
    /// Degenerate and near-degenerate triangles have an area of `0.0`: the
    /// squared area may come out negative or near-zero from floating point
    /// error, and must not reach the square root.
    pub fn area(&self) -> Float {
        let (a, b, c) = self.side_lengths();
        let s = (a + b + c) / 2.;
        let area_squared = s * (s - a) * (s - b) * (s - c);
        if area_squared < 0. || area_squared.abs() < PREDICATE_EPSILON {
            return 0.;
        }
        area_squared.sqrt()
    }

    #[inline]
    pub fn perimeter(&self) -> Float {
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    /// The circle passing through the 3 vertices of this triangle.
    ///
    /// Errors when the discriminant is exactly zero, which means the vertices
    /// are collinear under this formula.
    pub fn circumcircle(&self) -> Result<Circle, NoCircumcircle> {
        let (a, b, c) = (
            DVec2::from(self.p0),
            DVec2::from(self.p1),
            DVec2::from(self.p2),
        );
        let disc = 2. * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if disc == 0. {
            return Err(NoCircumcircle);
        }
        let ux = (a.length_squared() * (b.y - c.y)
            + b.length_squared() * (c.y - a.y)
            + c.length_squared() * (a.y - b.y))
            / disc;
        let uy = (a.length_squared() * (c.x - b.x)
            + b.length_squared() * (a.x - c.x)
            + c.length_squared() * (b.x - a.x))
            / disc;
        let center = Point::new(ux, uy);
        Ok(Circle::new(center, center.distance(self.p0)))
    }

    /// Returns `true` when the triangle covers `point`: the summed areas of
    /// the 3 sub-triangles formed with `point` match this triangle's own area
    /// within [`PREDICATE_EPSILON`].
    pub fn covers(&self, point: Point) -> bool {
        let summed_areas = Triangle::new(self.p0, self.p1, point).area()
            + Triangle::new(self.p1, self.p2, point).area()
            + Triangle::new(self.p2, self.p0, point).area();
        (summed_areas - self.area()).abs() < PREDICATE_EPSILON
    }

    pub fn as_wkt(&self) -> String {
        format!(
            "POLYGON(({} {}, {} {}, {} {}, {} {}))",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p0.x, self.p0.y
        )
    }
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
