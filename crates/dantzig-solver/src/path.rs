//! Didactic "improving path" across the vertices of the feasible region.
//!
//! This is a greedy ascent over the whole vertex set, not a simplex pivot
//! rule: each step jumps to the best improving vertex whether or not it shares
//! an edge with the current one. It exists to animate worst corner to best
//! corner, nothing more.

use std::cmp::Ordering;

use tracing::debug;

use crate::geometry::Point;
use crate::problem::Objective;
use crate::solution::Optimum;
use crate::tolerance::PATH_TOLERANCE;

/// One vertex on the path with its objective value
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    pub point: Point,
    pub value: f64,
}

/// Vertices ordered by non-decreasing objective value, ending at the optimum
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImprovementPath {
    pub steps: Vec<PathStep>,
}

impl ImprovementPath {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&PathStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    pub fn points(&self) -> Vec<Point> {
        self.steps.iter().map(|s| s.point).collect()
    }
}

pub struct PathBuilder {
    /// Distance under which a step counts as the optimum
    tolerance: f64,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            tolerance: PATH_TOLERANCE,
        }
    }
}

impl PathBuilder {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Build the path from the minimum-objective vertex to `goal`.
    ///
    /// `goal` is always the final step: if the ascent stops elsewhere (a tie
    /// on the optimal edge), it is appended explicitly.
    pub fn build(&self, vertices: &[Point], objective: &Objective, goal: &Optimum) -> ImprovementPath {
        let mut ordered: Vec<PathStep> = vertices
            .iter()
            .map(|p| PathStep {
                point: *p,
                value: objective.value(p),
            })
            .collect();
        if ordered.is_empty() {
            return ImprovementPath::empty();
        }
        // Stable, so equal values keep discovery order
        ordered.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));

        let mut remaining = ordered.split_off(1);
        let mut current = ordered[0];
        let mut steps = vec![current];

        loop {
            let mut pick: Option<usize> = None;
            for (i, step) in remaining.iter().enumerate() {
                if step.value <= current.value {
                    continue;
                }
                if pick.is_none_or(|j| step.value > remaining[j].value) {
                    pick = Some(i);
                }
            }
            let Some(i) = pick else {
                break;
            };
            current = remaining.remove(i);
            steps.push(current);
            if current.point.coincides(&goal.point, self.tolerance) {
                break;
            }
        }

        if !current.point.coincides(&goal.point, self.tolerance) {
            steps.push(PathStep {
                point: goal.point,
                value: goal.value,
            });
        }

        debug!(steps = steps.len(), "built improvement path");
        ImprovementPath { steps }
    }
}

/// Step-by-step cursor over a path, clamped to `[0, len - 1]`.
///
/// An empty path disables playback: moves are no-ops and there is no
/// current step.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    path: ImprovementPath,
    index: usize,
}

impl Playback {
    pub fn new(path: ImprovementPath) -> Self {
        Self { path, index: 0 }
    }

    pub fn path(&self) -> &ImprovementPath {
        &self.path
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_enabled(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn current(&self) -> Option<&PathStep> {
        self.path.steps.get(self.index)
    }

    pub fn next(&mut self) -> Option<&PathStep> {
        self.seek(self.index.saturating_add(1))
    }

    pub fn prev(&mut self) -> Option<&PathStep> {
        self.seek(self.index.saturating_sub(1))
    }

    /// Move to `index`, clamped into the path
    pub fn seek(&mut self, index: usize) -> Option<&PathStep> {
        if self.path.is_empty() {
            return None;
        }
        self.index = index.min(self.path.len() - 1);
        self.current()
    }

    /// `Step i/n`, or `—` when playback is disabled
    pub fn label(&self) -> String {
        if self.path.is_empty() {
            "—".to_string()
        } else {
            format!("Step {}/{}", self.index + 1, self.path.len())
        }
    }
}
