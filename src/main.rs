use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lpkit::problems::{diet, Network};
use lpkit::{
    write_lp_file, OptimizationProblem, OptimizationService, SolutionReport, SolverBackend,
    SolverConfig, SolverFactory,
};

#[derive(Parser)]
#[command(name = "lpkit")]
#[command(about = "Formulate and solve small linear programs with sensitivity reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solver backend
    #[arg(short, long, global = true, value_enum, default_value = "auto")]
    backend: BackendArg,

    /// Print the solution as JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    /// Write the model in LP format before solving
    #[arg(long, global = true, value_name = "PATH")]
    write_lp: Option<PathBuf>,

    /// Show solver log output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the diet model (minimize food cost over nutrient requirements)
    Diet,
    /// Solve the dual of the diet model (nutrient pricing)
    DietDual,
    /// Solve a shortest path problem over an arc-list network
    ShortestPath {
        /// Network file with one 'source,dest,length' arc per line
        /// (built-in sample network when omitted)
        file: Option<PathBuf>,
        /// Solve the arc-flow dual instead of the node-potential model
        #[arg(long)]
        dual: bool,
        /// Start node
        #[arg(long, default_value = "Honolulu")]
        origin: String,
        /// End node
        #[arg(long, default_value = "Heathrow London")]
        destination: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Auto,
    Highs,
    CoinCbc,
}

impl From<BackendArg> for SolverBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => SolverBackend::Auto,
            BackendArg::Highs => SolverBackend::Highs,
            BackendArg::CoinCbc => SolverBackend::CoinCbc,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut problem = build_problem(&cli.command)?;
    problem.solver_config = SolverConfig {
        backend: cli.backend.into(),
        verbose: cli.verbose,
    };

    if let Some(path) = &cli.write_lp {
        write_lp_file(&problem, path)
            .with_context(|| format!("writing LP file to {}", path.display()))?;
    }

    let service = OptimizationService::new(SolverFactory::create_solver(&problem)?);
    let solution = service.solve(&problem)?;
    let report = SolutionReport::new(&problem, &solution);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if !solution.is_feasible() {
        std::process::exit(1);
    }

    Ok(())
}

fn build_problem(command: &Commands) -> anyhow::Result<OptimizationProblem> {
    match command {
        Commands::Diet => Ok(diet::primal()),
        Commands::DietDual => Ok(diet::dual()),
        Commands::ShortestPath {
            file,
            dual,
            origin,
            destination,
        } => {
            let network = match file {
                Some(path) => {
                    let text = std::fs::read_to_string(path)
                        .with_context(|| format!("reading network file {}", path.display()))?;
                    Network::parse(&text)?
                }
                None => Network::sample(),
            };

            let problem = if *dual {
                network.flow_model(origin, destination)?
            } else {
                network.potentials_model(origin, destination)?
            };
            Ok(problem)
        }
    }
}
