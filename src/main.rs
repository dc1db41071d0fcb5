//! Main CLI application for the crossword solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_solver::{
    config::{CliOverrides, Settings},
    generator::{CrosswordProblem, SolutionValidator},
    puzzle::create_example_puzzle,
    utils::{ColorOutput, PuzzleFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "crossword_solver")]
#[command(about = "Constraint-satisfaction crossword filler")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword structure from a word list
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Word list file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Search node limit (overrides config)
        #[arg(short, long)]
        max_nodes: Option<u64>,

        /// Write the solution to this file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Inspect a puzzle's slots, crossings, and pruned domains without solving
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Word list file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { config, structure, words, max_nodes, output, verbose } => {
            solve_command(config, structure, words, max_nodes, output, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Analyze { config, structure, words } => {
            analyze_command(config, structure, words)
        }
    }
}

fn load_settings(config_path: &PathBuf, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn solve_command(
    config_path: PathBuf,
    structure_file: Option<PathBuf>,
    words_file: Option<PathBuf>,
    max_nodes: Option<u64>,
    output_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides { structure_file, words_file, max_nodes, output_file },
    )?;

    if verbose {
        println!("Configuration:");
        println!("  Structure: {}", settings.input.structure_file.display());
        println!("  Words: {}", settings.input.words_file.display());
        if let Some(limit) = settings.solver.max_nodes {
            println!("  Node limit: {}", limit);
        }
        println!();
    }

    let start_time = Instant::now();
    let problem = CrosswordProblem::new(settings.clone())
        .context("Failed to create crossword problem")?;

    let solution = problem.solve().context("Failed to run the solver")?;
    let total_time = start_time.elapsed();

    let Some(solution) = solution else {
        println!("{}", ColorOutput::warning("No solution."));
        return Ok(());
    };

    // Belt-and-suspenders re-check of the search result
    let validation = SolutionValidator::validate(&solution, problem.graph().slots());
    if !validation.is_valid {
        anyhow::bail!("Solver produced an invalid solution: {}", validation);
    }

    println!(
        "{}",
        ColorOutput::success(&format!("Solved in {:.3}s", total_time.as_secs_f64()))
    );
    println!();
    print!("{}", solution.render());

    if verbose || settings.solver.show_stats {
        println!();
        println!("{}", solution.summary());
    }

    if let Some(ref path) = settings.output.output_file {
        PuzzleFormatter::save_solution(&solution, path, &settings.output.format)
            .context("Failed to save solution")?;
        println!("\nSolution saved to {}", path.display());
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/structures");

    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.structure_file = directory.join("input/structures/ring.txt");
        default_settings.input.words_file = directory.join("input/structures/words.txt");
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzle(&input_dir).context("Failed to create example puzzle files")?;
    println!("Created example structures and word list in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add structures and word lists to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn analyze_command(
    config_path: PathBuf,
    structure_file: Option<PathBuf>,
    words_file: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides { structure_file, words_file, ..Default::default() },
    )?;

    let problem = CrosswordProblem::new(settings)
        .context("Failed to create crossword problem")?;

    let structure = problem.structure();
    println!("Structure ({}x{}):", structure.width, structure.height);
    println!("{}", PuzzleFormatter::format_structure_with_coords(structure));

    let graph = problem.graph();
    println!("Slots ({}):", graph.slot_count());
    for (id, slot) in graph.slots().iter().enumerate() {
        println!("  {:3}  {}  degree {}", id, slot, graph.degree(id));
    }
    println!("Crossings: {}", graph.constraint_count());
    println!("Vocabulary: {} words", problem.vocabulary().len());

    let (domains, ok) = problem.propagate();
    println!("\nDomain sizes after propagation:");
    for (id, slot) in graph.slots().iter().enumerate() {
        println!("  {:3}  {}  {} candidates", id, slot, domains.domain_size(id));
    }

    if ok {
        println!("\n{}", ColorOutput::info("Domains are arc consistent; puzzle may be solvable."));
    } else {
        println!("\n{}", ColorOutput::error("A domain collapsed during propagation; puzzle is unsolvable."));
    }

    Ok(())
}
