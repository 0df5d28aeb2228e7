use crate::geometry::Point;
use crate::problem::Objective;
use crate::solution::Optimum;

/// The vertex maximizing `objective`.
///
/// Ties go to the first maximal vertex in iteration order. Returns `None`
/// for an empty vertex set.
pub fn best_vertex(vertices: &[Point], objective: &Objective) -> Option<Optimum> {
    let (first, rest) = vertices.split_first()?;
    let mut best = Optimum {
        point: *first,
        value: objective.value(first),
    };
    for p in rest {
        let value = objective.value(p);
        if value > best.value {
            best = Optimum { point: *p, value };
        }
    }
    Some(best)
}
