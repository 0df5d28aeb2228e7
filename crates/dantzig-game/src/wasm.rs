//! WASM bindings for the Dantzig puzzle core
//!
//! The browser side owns rendering, input and storage; these functions hand it
//! plain numbers. Problems cross the boundary as the JSON shape of
//! `ProblemInstance`.

use dantzig_solver::{Point, ProblemInstance, Solution, Solver};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::generator::ProblemGenerator;
use crate::level::Level;
use crate::scoring::{DecisionMode, ScoreKey, score_point};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn problem_from_js(problem: JsValue) -> Result<ProblemInstance, JsValue> {
    let problem: ProblemInstance =
        serde_wasm_bindgen::from_value(problem).map_err(|e| JsValue::from_str(&e.to_string()))?;
    validated(problem).map_err(|e| JsValue::from_str(&e))
}

/// Reject problems the solver cannot work with before they reach it
fn validated(problem: ProblemInstance) -> Result<ProblemInstance, String> {
    problem.validate().map_err(|e| e.to_string())?;
    Ok(problem)
}

fn point_from_js(x: f64, y: f64) -> Result<Point, JsValue> {
    Point::try_new(x, y).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse<T: std::str::FromStr>(s: &str) -> Result<T, JsValue>
where
    T::Err: std::fmt::Display,
{
    s.parse::<T>().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a new problem for `level`; pass a seed to make it reproducible
#[wasm_bindgen]
pub fn generate_problem(level: &str, seed: Option<u32>) -> Result<JsValue, JsValue> {
    let level: Level = parse(level)?;
    let problem = match seed {
        Some(seed) => ProblemGenerator::from_seed(u64::from(seed)).generate(level),
        None => ProblemGenerator::from_entropy().generate(level),
    };
    to_js(&problem)
}

/// Feasible vertices of the problem's region
#[wasm_bindgen]
pub fn enumerate_vertices(problem: JsValue) -> Result<JsValue, JsValue> {
    let problem = problem_from_js(problem)?;
    to_js(&Solver::new().enumerate_vertices(&problem))
}

/// Returns `{ok, point?, value?, vertices}`
#[wasm_bindgen]
pub fn compute_optimum(problem: JsValue) -> Result<JsValue, JsValue> {
    let problem = problem_from_js(problem)?;
    to_js(&OptimumInfo::from(Solver::new().solve(&problem)))
}

#[derive(Serialize, Debug, PartialEq)]
struct OptimumInfo {
    ok: bool,
    point: Option<Point>,
    value: Option<f64>,
    vertices: Vec<Point>,
}

impl From<Solution> for OptimumInfo {
    fn from(solution: Solution) -> Self {
        Self {
            ok: solution.is_optimal(),
            point: solution.optimum.map(|o| o.point),
            value: solution.optimum.map(|o| o.value),
            vertices: solution.vertices,
        }
    }
}

/// Ordered path points from the worst vertex to the optimum (empty if infeasible)
#[wasm_bindgen]
pub fn build_improvement_path(problem: JsValue) -> Result<JsValue, JsValue> {
    let problem = problem_from_js(problem)?;
    to_js(&Solver::new().build_improvement_path(&problem).points())
}

#[wasm_bindgen]
pub fn is_feasible(problem: JsValue, x: f64, y: f64, mode: &str) -> Result<bool, JsValue> {
    let problem = problem_from_js(problem)?;
    let mode: DecisionMode = parse(mode)?;
    let point = point_from_js(x, y)?;
    Ok(Solver::new().is_feasible(&problem, &point, mode.quantization()))
}

#[wasm_bindgen]
pub fn objective_value(problem: JsValue, x: f64, y: f64) -> Result<f64, JsValue> {
    let problem = problem_from_js(problem)?;
    let point = point_from_js(x, y)?;
    Ok(problem.objective_value(&point))
}

/// Snap a dragged or typed point to the mode's lattice and the bounds
#[wasm_bindgen]
pub fn snap_point(problem: JsValue, x: f64, y: f64, mode: &str) -> Result<JsValue, JsValue> {
    let problem = problem_from_js(problem)?;
    let mode: DecisionMode = parse(mode)?;
    to_js(&mode.snap(point_from_js(x, y)?, &problem.bounds))
}

/// Score a candidate point; errors when the problem has no solution
#[wasm_bindgen]
pub fn score(problem: JsValue, x: f64, y: f64, mode: &str) -> Result<JsValue, JsValue> {
    let problem = problem_from_js(problem)?;
    let mode: DecisionMode = parse(mode)?;
    let solver = Solver::new();
    let solution = solver.solve(&problem);
    let score = score_point(&solver, &problem, &solution, Point::new(x, y), mode)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&score)
}

/// Storage key for the best score of a level and mode
#[wasm_bindgen]
pub fn score_key(level: &str, mode: &str) -> Result<String, JsValue> {
    Ok(ScoreKey::new(parse(level)?, parse(mode)?).to_string())
}
