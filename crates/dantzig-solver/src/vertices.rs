use tracing::{debug, trace};

use crate::constraints::ConstraintSet;
use crate::geometry::{Line, Point};
use crate::tolerance::Tolerances;

/// Brute-force vertex enumeration: intersect every pair of boundary lines,
/// add the rectangle corners, keep what is feasible, drop near-duplicates.
///
/// With at most ten lines there are at most 45 pairs, so no pruning is done.
#[derive(Debug, Clone, Copy)]
pub struct VertexEnumerator {
    parallel_tolerance: f64,
    dedup_tolerance: f64,
}

impl Default for VertexEnumerator {
    fn default() -> Self {
        Self::new(&Tolerances::default())
    }
}

impl VertexEnumerator {
    pub fn new(tolerances: &Tolerances) -> Self {
        Self {
            parallel_tolerance: tolerances.parallel,
            dedup_tolerance: tolerances.dedup,
        }
    }

    /// All pairwise intersections followed by the four corners, unfiltered
    pub fn candidates(&self, set: &ConstraintSet<'_>) -> Vec<Point> {
        let mut points = pairwise_intersections(&set.lines(), self.parallel_tolerance);
        // Corners go in directly so they never depend on the intersection step
        points.extend(set.bounds().corners());
        points
    }

    /// Feasible, deduplicated vertices in discovery order.
    ///
    /// An empty result means the region is empty.
    pub fn enumerate(&self, set: &ConstraintSet<'_>) -> Vec<Point> {
        let candidates = self.candidates(set);
        let total = candidates.len();
        let feasible: Vec<Point> = candidates.into_iter().filter(|p| set.feasible(p)).collect();
        let vertices = dedup(feasible, self.dedup_tolerance);
        debug!(candidates = total, vertices = vertices.len(), "enumerated vertices");
        vertices
    }
}

/// Intersections of every unordered pair `(i, j)`, `i < j`, skipping pairs
/// whose determinant is below `parallel_tolerance`
pub fn pairwise_intersections(lines: &[Line], parallel_tolerance: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(lines.len() * lines.len().saturating_sub(1) / 2);
    for (i, li) in lines.iter().enumerate() {
        for (j, lj) in lines.iter().enumerate().skip(i + 1) {
            match li.intersect(lj, parallel_tolerance) {
                Some(p) => points.push(p),
                None => trace!(i, j, "skipping parallel line pair"),
            }
        }
    }
    points
}

/// Keep a point only if no previously kept point is within `tolerance`
pub fn dedup(points: Vec<Point>, tolerance: f64) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|q| q.coincides(&p, tolerance)) {
            unique.push(p);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Bounds, Constraint};

    fn contains(points: &[Point], x: f64, y: f64) -> bool {
        points.iter().any(|p| p.coincides(&Point::new(x, y), 1e-6))
    }

    #[test]
    fn test_enumerate_triangle() {
        // x + y <= 8 inside a 10x10 box
        let constraints = vec![Constraint::new(1.0, 1.0, 8.0)];
        let set = ConstraintSet::new(Bounds::new(10.0, 10.0), &constraints, 1e-9);
        let vertices = VertexEnumerator::default().enumerate(&set);

        println!("Vertices: {:?}", vertices);

        assert_eq!(vertices.len(), 3);
        assert!(contains(&vertices, 0.0, 0.0));
        assert!(contains(&vertices, 8.0, 0.0));
        assert!(contains(&vertices, 0.0, 8.0));
        assert!(!contains(&vertices, 10.0, 0.0));
        assert!(!contains(&vertices, 0.0, 10.0));
        assert!(!contains(&vertices, 10.0, 10.0));
    }

    #[test]
    fn test_enumerate_plain_rectangle() {
        let set = ConstraintSet::new(Bounds::new(12.0, 9.0), &[], 1e-9);
        let vertices = VertexEnumerator::default().enumerate(&set);

        assert_eq!(vertices.len(), 4);
        for corner in Bounds::new(12.0, 9.0).corners() {
            assert!(contains(&vertices, corner.x, corner.y), "missing corner {:?}", corner);
        }
    }

    #[test]
    fn test_candidates_include_corners_and_intersections() {
        let constraints = vec![Constraint::new(1.0, 1.0, 8.0)];
        let set = ConstraintSet::new(Bounds::new(10.0, 10.0), &constraints, 1e-9);
        let candidates = VertexEnumerator::default().candidates(&set);

        // 5 lines -> 10 pairs, 2 parallel pairs among the bounds -> 8 points, plus 4 corners
        assert_eq!(candidates.len(), 12);
        assert!(contains(&candidates, 10.0, 10.0));
        assert!(contains(&candidates, 10.0, -2.0));
    }

    #[test]
    fn test_degenerate_vertex_is_deduplicated() {
        // Both constraints pass through (6, 2); three lines meet at that point
        let constraints = vec![Constraint::new(1.0, 1.0, 8.0), Constraint::new(1.0, 3.0, 12.0)];
        let set = ConstraintSet::new(Bounds::new(10.0, 2.0), &constraints, 1e-9);
        let vertices = VertexEnumerator::default().enumerate(&set);

        let hits = vertices
            .iter()
            .filter(|p| p.coincides(&Point::new(6.0, 2.0), 1e-6))
            .count();
        assert_eq!(hits, 1, "vertices: {:?}", vertices);
    }

    #[test]
    fn test_empty_region() {
        let constraints = vec![Constraint::new(1.0, 1.0, -1.0)];
        let set = ConstraintSet::new(Bounds::new(10.0, 10.0), &constraints, 1e-9);
        assert!(VertexEnumerator::default().enumerate(&set).is_empty());
    }

    #[test]
    fn test_every_vertex_is_feasible() {
        let constraints = vec![
            Constraint::new(3.0, 5.0, 45.0),
            Constraint::new(6.0, 1.0, 50.0),
            Constraint::new(2.0, 7.0, 60.0),
        ];
        let set = ConstraintSet::new(Bounds::new(11.0, 14.0), &constraints, 1e-9);
        let vertices = VertexEnumerator::default().enumerate(&set);

        assert!(!vertices.is_empty());
        for v in &vertices {
            assert!(set.feasible(v), "{:?} is not feasible", v);
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(1.0 + 1e-9, 1.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0 - 1e-8),
        ];
        let unique = dedup(points, 1e-6);
        assert_eq!(unique, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    }
}
