/*!
# Complexity Analyzer CLI

Command-line interface for the pseudocode complexity analyzer.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use complexity_analyzer::batch::{analyze_file, BatchAnalyzer};
use complexity_analyzer::cli_common::{self, ConfigArgs, OutputArgs, OutputWriter};
use complexity_analyzer::reports::{ReportConfig, ReportManager};
use complexity_analyzer::{AnalyzerConfig, ComplexityAnalyzer};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "complexity-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Asymptotic complexity analyzer for parsed pseudocode"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an AST JSON file or a directory of them
    Analyze {
        /// AST file or directory
        path: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default configuration to a file
    Generate {
        /// Output file
        #[arg(short, long, default_value = "complexity-analyzer.toml")]
        output: PathBuf,
    },

    /// Print the effective configuration
    Show {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli_common::init_logging(cli.verbose)?;
    if cli.verbose {
        cli_common::print_header(
            "Complexity Analyzer",
            env!("CARGO_PKG_VERSION"),
            "Asymptotic complexity of parsed pseudocode",
        );
    }

    let succeeded = match cli.command {
        Commands::Analyze {
            path,
            config,
            output,
        } => run_analyze(&path, &config, &output)?,
        Commands::Config { command } => {
            run_config(command)?;
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns `false` when any input failed to analyze
fn run_analyze(path: &Path, config_args: &ConfigArgs, output_args: &OutputArgs) -> Result<bool> {
    cli_common::validate_path(path, "Input")?;

    let mut config = config_args.load()?;
    output_args.apply(&mut config);
    let manager = ReportManager::with_config(ReportConfig::from(&config.output));
    let format = manager.config().format;

    let start = Instant::now();
    let (content, succeeded) = if path.is_dir() {
        let batch = BatchAnalyzer::new(config.clone()).analyze_path(path)?;
        if batch.has_failures() {
            cli_common::print_warning(&format!(
                "{} of {} file(s) failed to analyze",
                batch.summary.failed, batch.summary.total_files
            ));
        }
        (manager.render_batch(&batch, format)?, !batch.has_failures())
    } else {
        let analyzer = ComplexityAnalyzer::with_config(&config);
        match analyze_file(&analyzer, path) {
            Ok(report) => (manager.render_report(&report, format)?, true),
            Err(err) => {
                cli_common::print_error(&format!("{}: {}", path.display(), err));
                (manager.render_error(&err.to_report(), format)?, false)
            }
        }
    };
    info!(
        "Analysis of {} took {}",
        path.display(),
        cli_common::format_duration(start.elapsed())
    );

    let mut writer = OutputWriter::create(output_args.output.as_deref())?;
    writer.write_content(&content)?;
    writer.flush()?;

    if let Some(output) = &output_args.output {
        cli_common::print_success(&format!("Report saved to {}", output.display()));
    }
    Ok(succeeded)
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Generate { output } => {
            cli_common::ensure_parent_exists(&output)?;
            AnalyzerConfig::default()
                .save_to_file(&output)
                .with_context(|| format!("Failed to generate {}", output.display()))?;
            cli_common::print_success(&format!("Configuration written to {}", output.display()));
        }
        ConfigCommands::Show { config } => {
            let loaded = config.load()?;
            match &config.config {
                Some(path) => cli_common::print_info(&format!("Configuration from {}", path.display())),
                None => cli_common::print_info("Default configuration"),
            }
            let mut writer = OutputWriter::stdout();
            writer.write_content(&loaded.to_toml()?)?;
            writer.flush()?;
        }
    }
    Ok(())
}
