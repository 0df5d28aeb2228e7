/// Default slack allowed when testing `a·x + b·y - d <= ε`
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;
/// Line pairs with `|det|` below this are treated as parallel
pub const PARALLEL_TOLERANCE: f64 = 1e-9;
/// Vertices closer than this are considered the same vertex
pub const DEDUP_TOLERANCE: f64 = 1e-6;
/// Distance under which a path step is considered to have reached the optimum
pub const PATH_TOLERANCE: f64 = 1e-6;

/// Numerical thresholds separating "exact" from "indistinguishable"
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub feasibility: f64,
    pub parallel: f64,
    pub dedup: f64,
    pub path: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            feasibility: FEASIBILITY_TOLERANCE,
            parallel: PARALLEL_TOLERANCE,
            dedup: DEDUP_TOLERANCE,
            path: PATH_TOLERANCE,
        }
    }
}

impl Tolerances {
    pub fn with_feasibility(mut self, tol: f64) -> Self {
        self.feasibility = tol;
        self
    }

    pub fn with_parallel(mut self, tol: f64) -> Self {
        self.parallel = tol;
        self
    }

    pub fn with_dedup(mut self, tol: f64) -> Self {
        self.dedup = tol;
        self
    }

    pub fn with_path(mut self, tol: f64) -> Self {
        self.path = tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_one_field() {
        let tolerances = Tolerances::default().with_dedup(1e-3);
        assert_eq!(tolerances.dedup, 1e-3);
        assert_eq!(tolerances.feasibility, FEASIBILITY_TOLERANCE);
        assert_eq!(tolerances.parallel, PARALLEL_TOLERANCE);
        assert_eq!(tolerances.path, PATH_TOLERANCE);
    }
}
