use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use symptom_core::Domain;
use symptom_export::codebook::{Codebook, write_codebook};
use symptom_export::paths::OutputPaths;
use symptom_synth::{Generator, validate};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(name = "symptom-gen")]
#[command(about = "Synthesize a labeled symptom intake dataset")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, validate, and write the dataset artifacts
    Generate(GenerateArgs),
    /// Write only the codebook
    Codebook {
        /// Output directory
        #[arg(long, default_value = config::DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// JSON generation config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the pseudo-random stream
    #[arg(long)]
    seed: Option<u64>,
    /// Number of rows to generate
    #[arg(long)]
    rows: Option<usize>,
    /// Valid rows required for the row-count check
    #[arg(long)]
    min_valid: Option<usize>,
    /// Probability that an answer is replaced by noise
    #[arg(long)]
    noise: Option<f64>,
    /// Creation date stamped on every row (YYYY-MM-DD)
    #[arg(long)]
    date: Option<jiff::civil::Date>,
    /// Output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // Integrity errors in the domain tables abort before any generation.
    let domain = Domain::standard()?;

    match cli.command {
        Commands::Generate(args) => generate(&domain, &args),
        Commands::Codebook { out_dir } => {
            let paths = OutputPaths::in_dir(out_dir);
            paths.ensure_dir()?;
            write_codebook(&paths.codebook(), &Codebook::from_domain(&domain))?;
            println!("Codebook written to {}", paths.codebook().display());
            Ok(())
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn generate(domain: &Domain, args: &GenerateArgs) -> Result<()> {
    let run = config::resolve(args)?;
    let min_valid_rows = run.generation.min_valid_rows;
    let row_count = run.generation.row_count;

    let mut generator = Generator::new(domain, run.generation)?;
    let dataset = generator.generate_dataset(row_count)?;
    let validated = validate(domain, dataset.rows, min_valid_rows);

    let paths = OutputPaths::in_dir(&run.out_dir);
    symptom_export::export_all(&paths, domain, dataset.header, &validated)?;

    if validated.valid_rows.is_empty() {
        return Err(eyre::eyre!(
            "no valid rows out of {} generated",
            validated.report.total_generated
        ));
    }
    if !validated.report.checks.row_count_passed {
        tracing::warn!(
            valid = validated.report.valid_rows,
            required = min_valid_rows,
            "row count check failed"
        );
    }

    println!(
        "Generated {} valid rows ({} excluded) in {}",
        validated.report.valid_rows,
        validated.report.failures,
        paths.dir().display()
    );
    Ok(())
}
