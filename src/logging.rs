use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("landofile=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("landofile=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a landofile read from disk
pub fn log_landofile_loaded(path: &str, format: &str) {
    tracing::debug!(path = path, format = format, "Landofile loaded");
}

/// Log layer discovery in a directory
pub fn log_layers_discovered(dir: &str, count: usize) {
    tracing::debug!(dir = dir, files = count, "Landofile layers discovered");
}

/// Log where loader settings came from
pub fn log_config_source(path: &str) {
    tracing::debug!(path = path, "Loader config read from file");
}

/// Log the outcome of validating one document
pub fn log_validation_result(source: &str, valid: bool, violations: usize) {
    if valid {
        tracing::info!(source = source, "Landofile is valid");
    } else {
        tracing::warn!(
            source = source,
            violations = violations,
            "Landofile failed validation"
        );
    }
}
