//! Rendering validation results for the terminal or as JSON.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use crate::error::{LandoError, Result};
use crate::landofile::Landofile;
use crate::validator::ValidationReport;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    files: Vec<String>,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

fn describe_files(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| f.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human readable report. `landofile` is the typed view when validation passed.
pub fn render_text(
    files: &[PathBuf],
    report: &ValidationReport,
    landofile: Option<&Landofile>,
) -> String {
    let mut out = String::new();
    let source = describe_files(files);

    if report.valid {
        let name = landofile.map(|l| l.name.as_str()).unwrap_or("landofile");
        let _ = writeln!(
            out,
            "{} {} is valid ({})",
            "✓".green().bold(),
            name.cyan().bold(),
            source.dimmed()
        );

        if let Some(landofile) = landofile {
            if let Some(recipe) = &landofile.recipe {
                let _ = writeln!(out, "  {} recipe: {}", "→".blue(), recipe);
            }
            for (service, entries) in &landofile.proxy {
                for entry in entries {
                    match entry.route() {
                        Ok(route) => {
                            let _ = writeln!(out, "  {} {}: {}", "→".blue(), service.bold(), route);
                        }
                        Err(LandoError::InvalidRoute { route, reason }) => {
                            let _ = writeln!(
                                out,
                                "  {} {}: {} ({})",
                                "⚠".yellow(),
                                service.bold(),
                                route,
                                reason
                            );
                        }
                        Err(other) => {
                            let _ = writeln!(out, "  {} {}", "⚠".yellow(), other);
                        }
                    }
                }
            }
        }
    } else {
        let _ = writeln!(
            out,
            "{} {} failed validation ({} violation(s))",
            "✗".red().bold(),
            source.yellow(),
            report.errors.len()
        );
        for violation in &report.errors {
            let _ = writeln!(
                out,
                "  {} {}: {} {}",
                "•".blue(),
                violation.location().bold(),
                violation.message,
                format!("({})", violation.keyword).dimmed()
            );
        }
    }

    out
}

/// Machine readable report.
pub fn render_json(files: &[PathBuf], report: &ValidationReport) -> Result<String> {
    let output = JsonOutput {
        files: files.iter().map(|f| f.display().to_string()).collect(),
        report,
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| LandoError::Other(anyhow::anyhow!("Failed to serialize report: {e}")))
}
