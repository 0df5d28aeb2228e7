use clap::{Args, Parser, Subcommand};
use dantzig_game::{DecisionMode, Level, ProblemGenerator, Puzzle, ScoreKey, score_point};
use dantzig_solver::{Point, ProblemInstance, Solution, SolutionStatus, Solver};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "dantzig")]
#[command(about = "Generate, solve and score two-variable LP puzzles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Log format (pretty, json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,
    #[command(flatten)]
    tolerances: ToleranceArgs,
}

#[derive(Args)]
struct ToleranceArgs {
    /// Slack allowed when testing a constraint
    #[arg(long, global = true)]
    feasibility_tol: Option<f64>,
    /// Determinant below which two lines count as parallel
    #[arg(long, global = true)]
    parallel_tol: Option<f64>,
    /// Distance below which two vertices are merged
    #[arg(long, global = true)]
    dedup_tol: Option<f64>,
    /// Distance below which a path step counts as the optimum
    #[arg(long, global = true)]
    path_tol: Option<f64>,
}

impl ToleranceArgs {
    fn solver(&self) -> Solver {
        let mut solver = Solver::new();
        if let Some(tol) = self.feasibility_tol {
            solver = solver.with_feasibility_tolerance(tol);
        }
        if let Some(tol) = self.parallel_tol {
            solver = solver.with_parallel_tolerance(tol);
        }
        if let Some(tol) = self.dedup_tol {
            solver = solver.with_dedup_tolerance(tol);
        }
        if let Some(tol) = self.path_tol {
            solver = solver.with_path_tolerance(tol);
        }
        solver
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new puzzle
    Generate {
        /// Difficulty (easy, medium, hard, expert)
        #[arg(short, long, default_value = "easy")]
        level: String,
        /// Seed for a reproducible puzzle
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Enumerate the vertices of a problem file and report the optimum
    Solve {
        /// The problem file (JSON)
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show the improving path from the worst vertex to the optimum
    Path {
        /// The problem file (JSON)
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Score a candidate point against the optimum
    Score {
        /// The problem file (JSON)
        file: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Decision mode (cont, int, bool)
        #[arg(short, long, default_value = "cont")]
        mode: String,
        /// Level the score is filed under
        #[arg(short, long, default_value = "easy")]
        level: String,
    },
    /// Check a problem file for errors
    Check {
        /// The problem file (JSON)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);
    let solver = cli.tolerances.solver();

    match cli.command {
        Commands::Generate { level, seed, format } => {
            let level = parse_or_exit::<Level>(&level);
            let mut generator = match seed {
                Some(seed) => ProblemGenerator::from_seed(seed),
                None => ProblemGenerator::from_entropy(),
            };
            let puzzle = Puzzle::generate(&mut generator, level, &solver);

            if format == "json" {
                print_json(&puzzle.problem);
            } else {
                println!("Level: {}", puzzle.level);
                print_problem(&puzzle.problem);
                println!();
                let start = puzzle.start_point();
                println!("Start point: ({:.2}, {:.2})", start.x, start.y);
            }
        }
        Commands::Solve { file, format } => {
            let problem = read_problem(&file);
            let solution = solver.solve(&problem);

            if format == "json" {
                print_json(&solution);
            } else {
                print_problem(&problem);
                println!();
                print_solution(&problem, &solution);
            }
            if solution.status == SolutionStatus::Infeasible {
                std::process::exit(1);
            }
        }
        Commands::Path { file, format } => {
            let problem = read_problem(&file);
            let solution = solver.solve(&problem);
            let path = solver.improvement_path(&problem, &solution);

            if format == "json" {
                print_json(&path);
            } else if path.is_empty() {
                println!("Status: INFEASIBLE");
                println!("No path: the feasible region is empty.");
            } else {
                println!("Improving path ({} steps):", path.len());
                for (i, step) in path.steps.iter().enumerate() {
                    println!(
                        "  Step {}/{}  ({:8.3}, {:8.3})  z = {:.2}",
                        i + 1,
                        path.len(),
                        step.point.x,
                        step.point.y,
                        step.value
                    );
                }
            }
            if path.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Score { file, x, y, mode, level } => {
            let problem = read_problem(&file);
            let mode = parse_or_exit::<DecisionMode>(&mode);
            let level = parse_or_exit::<Level>(&level);
            let point = mode.snap(Point::new(x, y), &problem.bounds);
            let solution = solver.solve(&problem);

            let score = match score_point(&solver, &problem, &solution, point, mode) {
                Ok(score) => score,
                Err(e) => {
                    eprintln!("Score error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Candidate: ({:.2}, {:.2}) [{}]", point.x, point.y, mode);
            println!("{}", score);
            if !score.feasible {
                println!("Outside the feasible region.");
            } else if score.is_perfect() {
                println!("Perfect! Optimal vertex.");
            } else {
                println!("Feasible. You can improve.");
            }
            println!("Best-score key: {}", ScoreKey::new(level, mode));
        }
        Commands::Check { file } => {
            let problem = read_problem(&file);
            let vertices = solver.enumerate_vertices(&problem);

            if vertices.is_empty() {
                eprintln!("✗ {} has an empty feasible region", file.display());
                std::process::exit(1);
            }
            println!("✓ {} is valid", file.display());
            println!("  {} constraints", problem.num_constraints());
            println!("  {} vertices", vertices.len());
        }
    }
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        "json" => {
            fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
    }
}

fn parse_or_exit<T>(value: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_problem(file: &Path) -> ProblemInstance {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    let problem: ProblemInstance = match serde_json::from_str(&source) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = problem.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    tracing::debug!(file = %file.display(), constraints = problem.num_constraints(), "loaded problem");
    problem
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding JSON: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_problem(problem: &ProblemInstance) {
    println!("Maximize: {}x + {}y", problem.objective.c1, problem.objective.c2);
    println!("Subject to:");
    println!("  0 <= x <= {}", problem.bounds.x_max);
    println!("  0 <= y <= {}", problem.bounds.y_max);
    for c in &problem.constraints {
        println!("  {}x + {}y <= {}", c.a, c.b, c.d);
    }
}

fn print_solution(problem: &ProblemInstance, solution: &Solution) {
    match solution.optimum() {
        Ok(optimum) => {
            println!("Status: OPTIMAL");
            println!(
                "Optimum: ({:.3}, {:.3})  z* = {:.2}",
                optimum.point.x, optimum.point.y, optimum.value
            );
            println!();
            println!("Vertices:");
            for v in &solution.vertices {
                println!(
                    "  ({:8.3}, {:8.3})  z = {:.2}",
                    v.x,
                    v.y,
                    problem.objective_value(v)
                );
            }
        }
        Err(e) => {
            println!("Status: INFEASIBLE");
            println!("{}", e);
        }
    }
}
