//! discmap CLI - fixed-border disc parameterization.
//!
//! Usage: discmap <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `discmap --help` for available commands. Set `RUST_LOG=debug` to trace
//! the parameterization steps.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use discmap::algo::parameterize::{
    count_folded_faces, AuthalicWeights, BiCgStab, BorderMapper, BorderSpacing, CircularBorder,
    CotangentWeights, DenseLu, FixedBorderOptions, FixedBorderParameterizer, MeanValueCoordinates,
    Parameterization, SparseSolver, SquareBorder, UniformWeights, WeightStrategy,
};
use discmap::error::{MeshError, ParamResult};
use discmap::io;
use discmap::mesh::HalfEdgeMesh;

#[derive(Parser)]
#[command(name = "discmap")]
#[command(author, version, about = "Fixed-border disc parameterization CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Compute UV coordinates for a disc-shaped mesh
    Param {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file (.obj or .ply)
        output: PathBuf,

        /// Edge weights
        #[arg(short, long, value_enum, default_value = "mean-value")]
        weights: Weights,

        /// Shape the border is mapped onto
        #[arg(short, long, value_enum, default_value = "circle")]
        border: Border,

        /// Spacing of border vertices on the circle
        #[arg(long, value_enum, default_value = "arc-length")]
        spacing: Spacing,

        /// Linear solver
        #[arg(long, value_enum, default_value = "bicgstab")]
        solver: Solver,

        /// Maximum iterations for the iterative solver
        #[arg(long, default_value = "5000")]
        max_iterations: usize,

        /// Relative residual tolerance for the iterative solver
        #[arg(long, default_value = "1e-12")]
        tolerance: f64,

        /// Scale the result into the unit square
        #[arg(long)]
        normalize: bool,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Weights {
    /// Floater's mean-value coordinates (always one-to-one)
    MeanValue,
    /// Tutte's barycentric mapping
    Uniform,
    /// Discrete harmonic weights (may fold)
    Cotangent,
    /// Discrete authalic weights (may fold)
    Authalic,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Border {
    /// Unit circle at the origin
    Circle,
    /// Unit square
    Square,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Spacing {
    /// Proportional to boundary edge lengths
    ArcLength,
    /// Equal steps
    Uniform,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Solver {
    /// Jacobi-preconditioned BiCGSTAB
    Bicgstab,
    /// Dense LU (small meshes only)
    Lu,
}

/// Solver and execution settings shared by every weight/border combination.
struct SolveSettings {
    solver: Solver,
    bicgstab: BiCgStab,
    options: FixedBorderOptions,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Param {
            input,
            output,
            weights,
            border,
            spacing,
            solver,
            max_iterations,
            tolerance,
            normalize,
            sequential,
        } => {
            if max_iterations == 0 {
                return Err(MeshError::invalid_param("max-iterations", max_iterations, "must be positive").into());
            }
            if !(tolerance > 0.0) {
                return Err(MeshError::invalid_param("tolerance", tolerance, "must be positive").into());
            }

            let settings = SolveSettings {
                solver,
                bicgstab: BiCgStab::default()
                    .with_max_iterations(max_iterations)
                    .with_tolerance(tolerance),
                options: FixedBorderOptions::default().with_parallel(!sequential),
            };
            cmd_param(&input, &output, weights, border, spacing, &settings, normalize)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mesh: HalfEdgeMesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Edges: {}", mesh.num_edges());
    println!("Faces: {}", mesh.num_faces());
    println!("Surface area: {:.6}", mesh.surface_area());

    if let Some((min, max)) = mesh.bounding_box() {
        println!("Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z);
    }

    if mesh.is_triangle_mesh() {
        println!("Mesh type: Triangle mesh");
    } else {
        println!("Mesh type: Polygon mesh");
    }

    let loops = mesh.boundary_loops();
    let euler = mesh.euler_characteristic();
    println!("Boundary loops: {}", loops.len());
    for (i, boundary) in loops.iter().enumerate() {
        println!("  Loop {}: {} vertices", i, boundary.len());
    }
    println!("Euler characteristic: {}", euler);

    let is_disc = loops.len() == 1 && euler == 1;
    println!("Topology: {}", if is_disc { "Disc" } else { "Not a disc" });
    if is_disc && mesh.is_triangle_mesh() {
        println!("Ready for fixed-border parameterization");
    }

    Ok(())
}

fn cmd_param(
    input: &PathBuf,
    output: &PathBuf,
    weights: Weights,
    border: Border,
    spacing: Spacing,
    settings: &SolveSettings,
    normalize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh: HalfEdgeMesh = io::load(input)?;

    println!("Loaded: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());

    let spacing = match spacing {
        Spacing::ArcLength => BorderSpacing::ArcLength,
        Spacing::Uniform => BorderSpacing::Uniform,
    };
    let mode = if settings.options.parallel { "parallel" } else { "sequential" };

    let start = Instant::now();
    let mut result = match weights {
        Weights::MeanValue => {
            println!("Mapping with mean-value coordinates ({})...", mode);
            with_border(&mesh, MeanValueCoordinates, border, spacing, settings)
        }
        Weights::Uniform => {
            println!("Mapping with uniform weights ({})...", mode);
            with_border(&mesh, UniformWeights, border, spacing, settings)
        }
        Weights::Cotangent => {
            println!("Mapping with cotangent weights ({})...", mode);
            with_border(&mesh, CotangentWeights, border, spacing, settings)
        }
        Weights::Authalic => {
            println!("Mapping with authalic weights ({})...", mode);
            with_border(&mesh, AuthalicWeights, border, spacing, settings)
        }
    }?;
    let elapsed = start.elapsed();

    println!(
        "Result: {} border, {} interior vertices, {} nonzeros",
        result.border_vertices, result.interior_vertices, result.nonzeros
    );
    if result.one_to_one {
        println!("One-to-one: guaranteed");
    } else {
        let folded = count_folded_faces(&mesh, &result.uv);
        println!("One-to-one: not guaranteed ({} folded faces)", folded);
    }

    if normalize {
        result.uv.normalize();
    }
    io::save_with_uvs(&mesh, &result.uv, output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}

fn with_border<W: WeightStrategy>(
    mesh: &HalfEdgeMesh,
    weights: W,
    border: Border,
    spacing: BorderSpacing,
    settings: &SolveSettings,
) -> ParamResult<Parameterization> {
    match border {
        Border::Circle => with_solver(mesh, weights, CircularBorder::new(spacing), settings),
        Border::Square => with_solver(mesh, weights, SquareBorder, settings),
    }
}

fn with_solver<W: WeightStrategy, B: BorderMapper>(
    mesh: &HalfEdgeMesh,
    weights: W,
    border: B,
    settings: &SolveSettings,
) -> ParamResult<Parameterization> {
    match settings.solver {
        Solver::Bicgstab => solve(mesh, weights, border, settings.bicgstab, settings.options),
        Solver::Lu => solve(mesh, weights, border, DenseLu, settings.options),
    }
}

fn solve<W: WeightStrategy, B: BorderMapper, S: SparseSolver>(
    mesh: &HalfEdgeMesh,
    weights: W,
    border: B,
    solver: S,
    options: FixedBorderOptions,
) -> ParamResult<Parameterization> {
    FixedBorderParameterizer::new(weights, border, solver)
        .with_options(options)
        .parameterize(mesh)
}
