use crate::types::{Float, Point, PREDICATE_EPSILON};

/// Signed-area orientation of the ordered triplet (pa, pb, pc).
///
/// Positive for one winding, negative for the other, zero on a straight line.
#[inline]
pub fn orientation(pa: Point, pb: Point, pc: Point) -> Float {
    (pa.x - pc.x) * (pb.y - pc.y) - (pb.x - pc.x) * (pa.y - pc.y)
}

/// Returns `true` when the three points lie on a straight line.
///
/// Nearly collinear points (orientation within [`PREDICATE_EPSILON`]) are
/// considered collinear as well.
#[inline]
pub fn are_collinear(pa: Point, pb: Point, pc: Point) -> bool {
    orientation(pa, pb, pc).abs() < PREDICATE_EPSILON
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
