//! Even-odd point-in-polygon testing for OCR word boxes.
//!
//! Points exactly on an edge or vertex get whatever parity the ray crossing
//! count gives them. Horizontal edges never toggle the parity.

use geo::{BoundingRect, Coord, CoordFloat, Polygon};
use tracing::instrument;

/// Tests `point` against the exterior ring of `polygon`.
///
/// Interior rings are ignored; OCR word boxes never have holes.
#[instrument(level = "trace", skip(polygon))]
pub fn point_in_polygon<T: CoordFloat>(point: Coord<T>, polygon: &Polygon<T>) -> bool {
    let Some(bounds) = polygon.bounding_rect() else {
        return false;
    };
    let (min, max) = (bounds.min(), bounds.max());
    if point.x < min.x || point.x > max.x || point.y < min.y || point.y > max.y {
        return false;
    }
    point_in_ring(point, &polygon.exterior().0)
}

/// Ray-casting test over a plain vertex list, implicitly closed.
///
/// Returns `false` for fewer than 3 vertices or a non-finite point.
pub fn point_in_ring<T: CoordFloat>(point: Coord<T>, ring: &[Coord<T>]) -> bool {
    let ring = open_ring(ring);
    if ring.len() < 3 || !point.x.is_finite() || !point.y.is_finite() {
        return false;
    }

    let Coord { x, y } = point;
    let mut inside = false;
    let mut previous = ring[ring.len() - 1];
    for &current in ring {
        let Coord { x: xi, y: yi } = current;
        let Coord { x: xj, y: yj } = previous;
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

// geo stores rings closed; the repeated first vertex is not a vertex of its own.
fn open_ring<T: CoordFloat>(ring: &[Coord<T>]) -> &[Coord<T>] {
    match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}
