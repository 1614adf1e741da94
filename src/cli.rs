use anyhow::{Context as _, Result};
use autoanalyst::analyser::{analyse_df, load_df};
use autoanalyst::config::ReportConfig;
use autoanalyst::error::Error;
use autoanalyst::report::{OpenAiService, ReportGenerator, summarise};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autoanalyst", about = "Dataset analysis and executive reporting tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a dataset and print its statistical digest
    Analyse {
        /// Path to the dataset (CSV, XLSX or XLS)
        file: PathBuf,

        /// Print the full analysis as JSON instead of the text digest
        #[arg(long)]
        json: bool,
    },
    /// Analyse a dataset and generate an executive report
    Report {
        /// Path to the dataset (CSV, XLSX or XLS)
        file: PathBuf,

        /// OpenAI API key
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model identifier for the report call
        #[arg(long)]
        model: Option<String>,
    },
}

pub async fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyse { file, json } => handle_analyse(file, json),
        Commands::Report {
            file,
            api_key,
            model,
        } => handle_report(file, api_key, model).await,
    }
}

fn handle_analyse(file: PathBuf, json: bool) -> Result<()> {
    let df = load_df(&file).context("Failed to load dataset")?;
    let analysis = analyse_df(&df).context("Failed to analyse dataset")?;
    tracing::info!(
        rows = analysis.row_count,
        columns = analysis.column_count,
        "analysis complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", summarise(&analysis));
    }
    Ok(())
}

async fn handle_report(file: PathBuf, api_key: Option<String>, model: Option<String>) -> Result<()> {
    // The credential check runs before any work so a misconfigured
    // environment fails up front rather than after the analysis.
    let api_key = api_key.ok_or_else(|| {
        Error::Config("OPENAI_API_KEY not set and no --api-key provided".to_owned())
    })?;

    let config = match model {
        Some(model) => ReportConfig::default().with_model(model),
        None => ReportConfig::default(),
    };

    let df = load_df(&file).context("Failed to load dataset")?;
    let analysis = analyse_df(&df).context("Failed to analyse dataset")?;
    println!(
        "Loaded {} rows x {} columns",
        analysis.row_count, analysis.column_count
    );

    let generator = ReportGenerator::new(OpenAiService::new(api_key, config));
    let report = generator.generate_report(&analysis).await?;
    println!("{report}");
    Ok(())
}
