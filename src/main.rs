use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use impact_compare::compare::WinnersReport;
use impact_compare::scoring::{RankedCandidate, ScoringPolicy};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank candidates by composite score
    Rank {
        /// JSON or YAML file containing a list of candidates
        input: PathBuf,
    },
    /// Show the winning candidate(s) for each metric
    Winners {
        /// JSON or YAML file containing a list of candidates
        input: PathBuf,
    },
}

impl Commands {
    fn input(&self) -> &PathBuf {
        match self {
            Commands::Rank { input } | Commands::Winners { input } => input,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "impact-compare")]
#[command(about = "Compare candidate solutions by business impact", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/impact-compare/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankOutput<'a> {
    best_overall_id: Option<&'a str>,
    ranking: &'a [RankedCandidate],
    winners: &'a WinnersReport,
}

fn main() {
    let cli = Cli::parse();
    impact_compare::logging::init_logging(cli.verbose);

    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match impact_compare::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.unwrap_or_default();
    let policy = match ScoringPolicy::try_from(&effective_scoring) {
        Ok(p) => p,
        Err(errors) => {
            eprintln!("Scoring config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(?policy, "scoring policy");

    let candidates = match impact_compare::impact::load_candidates(cli.command.input()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let winners = impact_compare::compute_winners(&candidates);
    let use_colors = impact_compare::output::should_use_colors();

    let output = match cli.command {
        Commands::Rank { .. } => {
            let ranked = impact_compare::rank_candidates(&candidates, &policy);
            let best = impact_compare::find_best_overall_id(&candidates, &policy);
            match cli.format {
                Format::Table => Ok(impact_compare::output::format_ranked_table(
                    &ranked,
                    best.as_deref(),
                    &winners,
                    use_colors,
                )),
                Format::Tsv => Ok(impact_compare::output::format_tsv(&ranked)),
                Format::Json => impact_compare::output::format_json(&RankOutput {
                    best_overall_id: best.as_deref(),
                    ranking: &ranked,
                    winners: &winners,
                }),
            }
        }
        Commands::Winners { .. } => match cli.format {
            Format::Table | Format::Tsv => Ok(impact_compare::output::format_winners_table(
                &winners,
                use_colors && cli.format == Format::Table,
            )),
            Format::Json => impact_compare::output::format_json(&winners),
        },
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }

    tracing::debug!(
        candidates = candidates.len(),
        elapsed = ?start_time.elapsed(),
        "done"
    );
    std::process::exit(EXIT_SUCCESS);
}
