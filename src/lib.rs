pub mod sampling;
pub mod triangulation;
pub mod types;
pub mod utils;

pub use glam;
pub use hashbrown;

pub use triangulation::{
    triangulation_from_points, DelaunayTriangulation, TriangulationConfiguration,
    TriangulationError,
};
pub use types::{Circle, Float, Point, Triangle};

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::{
        sampling::{random_points, DEFAULT_SEED},
        triangulation::triangulation_from_points,
        types::{Point, Triangle},
        DelaunayTriangulation, TriangulationConfiguration,
    };

    #[test]
    fn lone_triangle_is_delaunay() {
        // c
        // | \
        // |   \
        // a----b
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(0., 1.);

        let triangulation = DelaunayTriangulation::new(vec![a, b, c]);

        // The circumcircle covers exactly the 3 vertices
        assert!(triangulation.is_delaunay(&Triangle::new(a, b, c)));
    }

    #[test]
    fn interior_point_rejects_enclosing_triangle() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let c = Point::new(0., 1.);
        let d = Point::new(0.5, 0.5);

        let triangulation = DelaunayTriangulation::new(vec![a, b, c, d]);

        // d lies inside the circumcircle of (a, b, c): 4 covered points
        assert!(!triangulation.is_delaunay(&Triangle::new(a, b, c)));
    }

    #[test]
    fn wide_triangle_is_delaunay_against_itself() {
        let a = Point::new(0., 0.);
        let b = Point::new(1., 0.);
        let e = Point::new(2., 2.);

        let triangulation = DelaunayTriangulation::new(vec![a, b, e]);

        assert!(triangulation.is_delaunay(&Triangle::new(a, b, e)));
    }

    #[test]
    fn collinear_triangle_is_never_delaunay() {
        let f = Point::new(0., 0.);
        let g = Point::new(1., 1.);
        let h = Point::new(2., 2.);

        let triangulation = DelaunayTriangulation::new(vec![f, g, h]);

        // The collinearity guard fires before any circumcircle is computed
        assert!(!triangulation.is_delaunay(&Triangle::new(f, g, h)));
    }

    #[test]
    fn three_points_triangulate_to_one_triangle() {
        let points = vec![Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)];

        let triangulation =
            triangulation_from_points(points.clone(), TriangulationConfiguration::default())
                .expect("Triangulation should succeed");

        assert_eq!(
            vec![Triangle::new(points[0], points[1], points[2])],
            triangulation.triangles()
        );
    }

    #[test]
    fn points_output_round_trips_exactly() {
        let points = random_points(100, DEFAULT_SEED);
        let triangulation = DelaunayTriangulation::new(points.clone());

        let mut buffer = Vec::new();
        triangulation.output_points(&mut buffer).unwrap();
        let contents = String::from_utf8(buffer).unwrap();

        let mut lines = contents.lines();
        assert_eq!(Some("wkt"), lines.next());
        let parsed: Vec<Point> = lines.map(parse_point_wkt).collect();
        assert_eq!(points, parsed);
    }

    fn parse_point_wkt(line: &str) -> Point {
        let coordinates = line
            .strip_prefix("POINT(")
            .and_then(|rest| rest.strip_suffix(')'))
            .expect("line should be a POINT record");
        let (x, y) = coordinates
            .split_once(' ')
            .expect("coordinates should be space-separated");
        Point::new(x.parse().unwrap(), y.parse().unwrap())
    }
}
