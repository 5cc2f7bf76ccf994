use std::io::{self, Write};

use itertools::Itertools;
use log::info;
use thiserror::Error;

#[cfg(feature = "parallel_enumeration")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

#[cfg(feature = "profile_traces")]
use tracing::{span, Level};

use crate::types::{Point, Triangle};
use crate::utils::are_collinear;

/// Point count above which the candidate triangles are evaluated in parallel
pub const DEFAULT_PARALLEL_POINT_COUNT_THRESHOLD: usize = 100;

#[derive(Clone, Debug)]
pub struct TriangulationConfiguration {
    /// Point count above which the candidate triangles are evaluated in
    /// parallel. Only used with the `parallel_enumeration` feature.
    pub parallel_point_count_threshold: usize,
}
impl Default for TriangulationConfiguration {
    fn default() -> Self {
        Self {
            parallel_point_count_threshold: DEFAULT_PARALLEL_POINT_COUNT_THRESHOLD,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationError {
    #[error("at least 3 points are required to triangulate, got {0}")]
    NotEnoughPoints(usize),
}

/// Creates a Delaunay triangulation of `points` and runs it to completion.
pub fn triangulation_from_points(
    points: Vec<Point>,
    config: TriangulationConfiguration,
) -> Result<DelaunayTriangulation, TriangulationError> {
    let mut triangulation = DelaunayTriangulation::with_config(points, config);
    triangulation.triangulate()?;
    Ok(triangulation)
}

/// All index triples `(i, j, k)` with `i < j < k` below `count`, in
/// lexicographic order. Yields `count! / (3! * (count - 3)!)` triples.
#[inline]
pub(crate) fn index_triples(count: usize) -> impl Iterator<Item = (usize, usize, usize)> {
    (0..count).tuple_combinations()
}

/// Brute-force Delaunay triangulation of a planar point set.
///
/// Every 3-combination of the input points is examined: a candidate triangle
/// is part of the triangulation if and only if its circumcircle covers
/// exactly the triangle's own 3 vertices and no other input point.
/// O(n⁴): `C(n, 3)` candidates, each tested against all `n` points.
pub struct DelaunayTriangulation {
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    config: TriangulationConfiguration,
}

impl DelaunayTriangulation {
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_config(points, TriangulationConfiguration::default())
    }

    pub fn with_config(points: Vec<Point>, config: TriangulationConfiguration) -> Self {
        Self {
            points,
            triangles: Vec::new(),
            config,
        }
    }

    /// The input point set, never mutated by the triangulation
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The accepted triangles, in enumeration order
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn config(&self) -> &TriangulationConfiguration {
        &self.config
    }

    /// Triangulates the point set.
    ///
    /// Enumerates the candidate triangles in lexicographic index order and
    /// retains the ones passing [`Self::is_delaunay`], in enumeration order.
    /// Recomputes from scratch, so re-running is idempotent.
    ///
    /// Errors when the point set holds fewer than 3 points.
    pub fn triangulate(&mut self) -> Result<(), TriangulationError> {
        #[cfg(feature = "profile_traces")]
        let _span = span!(Level::TRACE, "triangulate").entered();

        let count = self.points.len();
        if count < 3 {
            return Err(TriangulationError::NotEnoughPoints(count));
        }
        self.triangles.clear();

        #[cfg(feature = "parallel_enumeration")]
        if count > self.config.parallel_point_count_threshold {
            self.triangulate_parallel();
            self.log_completion();
            return Ok(());
        }

        for (i, j, k) in index_triples(count) {
            let triangle = Triangle::new(self.points[i], self.points[j], self.points[k]);
            if self.is_delaunay(&triangle) {
                self.triangles.push(triangle);
            }
        }
        self.log_completion();
        Ok(())
    }

    /// Same output as the sequential enumeration: rayon's indexed collect
    /// preserves the lexicographic candidate order.
    #[cfg(feature = "parallel_enumeration")]
    fn triangulate_parallel(&mut self) {
        let count = self.points.len();
        let this: &Self = self;
        let accepted: Vec<Triangle> = (0..count)
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..count).flat_map(move |j| (j + 1..count).map(move |k| (i, j, k)))
            })
            .filter_map(|(i, j, k)| {
                let triangle = Triangle::new(this.points[i], this.points[j], this.points[k]);
                this.is_delaunay(&triangle).then_some(triangle)
            })
            .collect();
        self.triangles = accepted;
    }

    fn log_completion(&self) {
        let count = self.points.len();
        info!(
            "triangulated {} points into {} triangles ({} candidates examined)",
            count,
            self.triangles.len(),
            count * (count - 1) * (count - 2) / 6
        );
    }

    /// Does `triangle` conform to the Delaunay criterion for this point set?
    ///
    /// Collinear triangles are rejected outright. Otherwise the triangle
    /// qualifies if and only if its circumcircle covers exactly 3 input
    /// points: its own vertices, under the assumption of duplicate-free,
    /// non-degenerate input. Near-cocircular configurations can cover a 4th
    /// point through the outward tolerance of [`crate::types::Circle::covers`]
    /// and are then rejected as well.
    pub fn is_delaunay(&self, triangle: &Triangle) -> bool {
        if are_collinear(triangle.p0, triangle.p1, triangle.p2) {
            return false;
        }
        // The collinearity tolerance above is wider than the exact
        // discriminant check, so the circumcircle exists here
        let Ok(circumcircle) = triangle.circumcircle() else {
            return false;
        };
        let covered = self
            .points
            .iter()
            .filter(|&&point| circumcircle.covers(point))
            .count();
        covered == 3
    }

    /// Writes one `POINT` record per input point, preceded by a `wkt` header.
    pub fn output_points(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "wkt")?;
        for point in &self.points {
            writeln!(writer, "{}", point.as_wkt())?;
        }
        Ok(())
    }

    /// Writes one record per accepted triangle: WKT, id, area and perimeter,
    /// tab-separated. The id is the triangle's acceptance index.
    pub fn output_triangles(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "wkt\ttriangle_id\tarea\tperimeter")?;
        for (id, triangle) in self.triangles.iter().enumerate() {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                triangle.as_wkt(),
                id,
                triangle.area(),
                triangle.perimeter()
            )?;
        }
        Ok(())
    }

    /// Writes one record per accepted triangle's circumcircle, keyed by the
    /// same ids as [`Self::output_triangles`].
    pub fn output_circumcircles(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "wkt\ttriangle_id\tarea\tperimeter")?;
        for (id, triangle) in self.triangles.iter().enumerate() {
            // Accepted triangles are never collinear
            let Ok(circle) = triangle.circumcircle() else {
                continue;
            };
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                circle.as_wkt(),
                id,
                circle.area(),
                circle.perimeter()
            )?;
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
