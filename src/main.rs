use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use landofile::{loader, logging, output, schema, Landofile, LandofileValidator, LoaderConfig};

#[derive(Parser)]
#[command(name = "landofile")]
#[command(author = "Landofile Contributors")]
#[command(version)]
#[command(about = "Validate Lando landofiles against the landofile schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Validate a landofile or an app directory")]
    Validate {
        #[arg(
            default_value = ".",
            help = "Landofile, or directory containing one (layers are merged)"
        )]
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Report format")]
        format: OutputFormat,

        #[arg(long, help = "Base name of the landofile, e.g. .lando")]
        landofile: Option<String>,

        #[arg(long, help = "Only read the main landofile, skip pre and post layers")]
        single: bool,
    },

    #[command(about = "Print the landofile JSON schema")]
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Validate {
            path,
            format,
            landofile,
            single,
        } => validate(&path, format, landofile, single),
        Commands::Schema => {
            println!("{}", schema::schema_source().trim_end());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(
    path: &Path,
    format: OutputFormat,
    landofile: Option<String>,
    single: bool,
) -> Result<ExitCode> {
    let mut config = LoaderConfig::load()?;
    if let Some(name) = landofile {
        config.landofile = name;
    }

    let loaded = loader::load_path(path, &config, single)?;
    let validator = LandofileValidator::new()?;
    let report = validator.validate(&loaded.document);

    logging::log_validation_result(&path.display().to_string(), report.valid, report.errors.len());

    match format {
        OutputFormat::Text => {
            let typed = if report.valid {
                match Landofile::from_value(loaded.document.clone()) {
                    Ok(landofile) => Some(landofile),
                    Err(e) => {
                        tracing::debug!(error = %e, "Typed view unavailable");
                        None
                    }
                }
            } else {
                None
            };
            print!("{}", output::render_text(&loaded.files, &report, typed.as_ref()));
        }
        OutputFormat::Json => {
            println!("{}", output::render_json(&loaded.files, &report)?);
        }
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}
