use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::error;

use bp_dq::generator::generate_sample_data;
use bp_dq::logging;
use bp_dq::pipeline::run_pipeline;

#[derive(Parser)]
#[command(name = "bp_dq")]
#[command(about = "Business Partner data quality toolkit")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic Business Partner CSV data
    Generate {
        #[arg(long, default_value_t = 200)]
        rows: usize,
        #[arg(long, default_value = "data/raw/business_partners.csv")]
        out: PathBuf,
        /// RNG seed; identical seeds produce identical data
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Run data quality checks + dedup + report
    Run {
        #[arg(long, default_value = "data/raw/business_partners.csv")]
        input: PathBuf,
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
        #[arg(long, default_value = "data/output")]
        outdir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { rows, out, seed } => {
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            generate_sample_data(rows, &out, seed)?;
            println!("📄 Generated sample data -> {}", out.display());
        }
        Commands::Run {
            input,
            config,
            outdir,
        } => {
            fs::create_dir_all(&outdir)?;
            logging::init_logging(&outdir);

            println!("🔄 Running data quality pipeline...");
            match run_pipeline(&input, &config, &outdir) {
                Ok(summary) => {
                    println!("✅ Pipeline completed successfully");
                    println!("\n📊 Run results:");
                    println!("   Total rows: {}", summary.total_rows);
                    println!("   Issues found: {}", summary.total_issues);
                    println!("   Exact-duplicate rows: {}", summary.exact_duplicate_rows);
                    println!("   Fuzzy pairs: {}", summary.fuzzy_pairs);
                    println!("   Cleaned CSV: {}", summary.cleaned_csv.display());
                    println!("   Issues CSV : {}", summary.issues_csv.display());
                    println!("   Report HTML: {}", summary.report_html.display());
                }
                Err(e) => {
                    error!("Pipeline failed: {}", e);
                    println!("❌ Pipeline failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
