use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

use crate::validator::SchemaViolation;

#[derive(Debug)]
pub enum LandoError {
    LandofileNotFound {
        dir: PathBuf,
        searched: Vec<String>,
    },
    Parse {
        path: Option<PathBuf>,
        line: Option<usize>,
        message: String,
    },
    InputLimit {
        limit: &'static str,
        actual: usize,
        maximum: usize,
    },
    InvalidSchema(String),
    Validation {
        violations: Vec<SchemaViolation>,
    },
    InvalidRoute {
        route: String,
        reason: String,
    },
    IoError {
        operation: String,
        path: Option<PathBuf>,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl LandoError {
    pub fn not_found(dir: impl Into<PathBuf>, searched: Vec<String>) -> Self {
        Self::LandofileNotFound {
            dir: dir.into(),
            searched,
        }
    }

    pub fn parse(path: Option<PathBuf>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Parse {
            path,
            line,
            message: message.into(),
        }
    }

    pub fn invalid_route(route: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            route: route.into(),
            reason: reason.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }

    /// Attach a file path to a parse error that was raised without one.
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse {
                path: None,
                line,
                message,
            } => Self::Parse {
                path: Some(file.into()),
                line,
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for LandoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LandofileNotFound { dir, searched } => {
                writeln!(
                    f,
                    "{} No landofile found in: {}",
                    "✗".red().bold(),
                    dir.display().to_string().yellow()
                )?;
                if !searched.is_empty() {
                    writeln!(f, "{}", "Looked for:".green())?;
                    for name in searched {
                        writeln!(f, "  {} {}", "•".blue(), name)?;
                    }
                }
                Ok(())
            }
            Self::Parse {
                path,
                line,
                message,
            } => {
                writeln!(f, "{} Could not parse landofile", "✗".red().bold())?;
                if let Some(path) = path {
                    writeln!(
                        f,
                        "  {} Path: {}",
                        "→".blue(),
                        path.display().to_string().yellow()
                    )?;
                }
                if let Some(line) = line {
                    writeln!(f, "  {} Line: {}", "→".blue(), line)?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), message)?;
                Ok(())
            }
            Self::InputLimit {
                limit,
                actual,
                maximum,
            } => {
                writeln!(f, "{} Landofile exceeds {} limit", "✗".red().bold(), limit)?;
                writeln!(f, "  {} {} (maximum {})", "→".blue(), actual, maximum)?;
                Ok(())
            }
            Self::InvalidSchema(message) => {
                writeln!(f, "{} Schema could not be compiled", "✗".red().bold())?;
                writeln!(f, "  {} {}", "→".blue(), message)?;
                Ok(())
            }
            Self::Validation { violations } => {
                writeln!(
                    f,
                    "{} Landofile failed validation with {} violation(s)",
                    "✗".red().bold(),
                    violations.len()
                )?;
                for violation in violations {
                    writeln!(f, "  {} {}", "•".blue(), violation)?;
                }
                Ok(())
            }
            Self::InvalidRoute { route, reason } => {
                writeln!(
                    f,
                    "{} Invalid proxy route: {}",
                    "✗".red().bold(),
                    route.yellow()
                )?;
                writeln!(f, "  {} {}", "→".blue(), reason)?;
                Ok(())
            }
            Self::IoError {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path.display())?;
                }
                writeln!(f, "  {} Error: {}", "→".blue(), source)?;
                Ok(())
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for LandoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LandoError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for LandoError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, LandoError>;
