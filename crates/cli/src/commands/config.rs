//! Configuration inspection commands.
//!
//! Responsibilities:
//! - `config show`: print the effective configuration with provenance.
//! - `config check`: report fallbacks and TLS problems the loader tolerates.
//!
//! Does NOT handle:
//! - Validating provider or database selectors; those are owned by the
//!   components that consume them.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use text_to_sql_proxy_config::{Config, Field, LoadReport};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Check the configuration for problems
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Result of running a config command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ProblemsFound,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    config: &'a Config,
    tls_enabled: bool,
}

pub fn run(command: ConfigCommand, report: &LoadReport, out: &mut impl Write) -> Result<Outcome> {
    match command {
        ConfigCommand::Show { output } => {
            run_show(report, output, out)?;
            Ok(Outcome::Ok)
        }
        ConfigCommand::Check => run_check(report, out),
    }
}

fn field_value(config: &Config, field: Field) -> String {
    match field {
        Field::Port => config.port.to_string(),
        Field::AllowedOrigin => config.allowed_origin.clone(),
        Field::Provider => config.provider.clone(),
        Field::Database => config.database.clone(),
        Field::TlsCert => config.tls_cert.clone(),
        Field::TlsKey => config.tls_key.clone(),
    }
}

fn run_show(report: &LoadReport, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let config = report.config();
    match format {
        OutputFormat::Json => {
            let output = ShowOutput {
                config,
                tls_enabled: config.tls_enabled(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)
                .context("Failed to serialize configuration")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for field in Field::ALL {
                writeln!(
                    out,
                    "{:<16} {:<32} ({})",
                    field.name(),
                    field_value(config, field),
                    report.source_of(field)
                )?;
            }
            writeln!(out, "{:<16} {}", "tls_enabled", config.tls_enabled())?;
        }
    }
    Ok(())
}

/// Collect human-readable problems with the loaded configuration.
pub fn problems(report: &LoadReport) -> Vec<String> {
    let mut problems: Vec<String> = report.fallbacks().iter().map(ToString::to_string).collect();
    let config = report.config();

    if config.tls_partial() {
        let missing = if config.tls_cert.is_empty() {
            Field::TlsCert
        } else {
            Field::TlsKey
        };
        problems.push(format!(
            "TLS is half-configured: {} is not set, serving plain HTTP",
            missing.env_var()
        ));
    }

    if let Some((cert, key)) = config.tls_paths() {
        for (label, path) in [("certificate", cert), ("key", key)] {
            if let Some(problem) = check_file(label, path) {
                problems.push(problem);
            }
        }
    }

    problems
}

fn check_file(label: &str, path: &Path) -> Option<String> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => None,
        Ok(_) => Some(format!("TLS {label} {} is not a file", path.display())),
        Err(e) => Some(format!("TLS {label} {} is not readable: {e}", path.display())),
    }
}

fn run_check(report: &LoadReport, out: &mut impl Write) -> Result<Outcome> {
    let problems = problems(report);
    if problems.is_empty() {
        writeln!(out, "Configuration OK")?;
        return Ok(Outcome::Ok);
    }

    for problem in &problems {
        tracing::debug!(%problem, "configuration problem");
        writeln!(out, "{problem}")?;
    }
    Ok(Outcome::ProblemsFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;
    use text_to_sql_proxy_config::ConfigLoader;
    use text_to_sql_proxy_config::constants::{ENV_PORT, ENV_TLS_CERT};

    fn report_from(vars: &[(&str, &str)]) -> LoadReport {
        let env: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigLoader::new().from_source(&env).build_with_report()
    }

    fn run_to_string(command: ConfigCommand, report: &LoadReport) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = run(command, report, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_show_text_lists_sources() {
        let report = report_from(&[(ENV_PORT, "8080")]);
        let (outcome, text) = run_to_string(
            ConfigCommand::Show {
                output: OutputFormat::Text,
            },
            &report,
        );

        assert_eq!(outcome, Outcome::Ok);
        assert!(text.contains("8080"));
        assert!(text.contains("(env)"));
        assert!(text.contains("(default)"));
        assert!(text.contains("tls_enabled      false"));
    }

    #[test]
    fn test_show_json() {
        let report = report_from(&[]);
        let (_, text) = run_to_string(
            ConfigCommand::Show {
                output: OutputFormat::Json,
            },
            &report,
        );

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["port"], 4000);
        assert_eq!(json["provider"], "claude");
        assert_eq!(json["tls_enabled"], false);
    }

    #[test]
    fn test_check_clean_config() {
        let (outcome, text) = run_to_string(ConfigCommand::Check, &report_from(&[]));
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(text.trim(), "Configuration OK");
    }

    #[test]
    fn test_check_reports_port_fallback() {
        let problems = problems(&report_from(&[(ENV_PORT, "70000")]));
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("TEXT_TO_SQL_PROXY_PORT"));
    }

    #[test]
    fn test_check_reports_half_configured_tls() {
        let problems = problems(&report_from(&[(ENV_TLS_CERT, "/path/to/cert.pem")]));
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("TEXT_TO_SQL_PROXY_TLS_KEY"));
    }

    #[test]
    fn test_check_tls_files() {
        let temp_dir = TempDir::new().unwrap();
        let cert = temp_dir.path().join("cert.pem");
        std::fs::write(&cert, "cert").unwrap();
        let missing_key = temp_dir.path().join("key.pem");

        let report = ConfigLoader::new()
            .with_tls_cert(cert.to_string_lossy().into_owned())
            .with_tls_key(missing_key.to_string_lossy().into_owned())
            .build_with_report();
        let problems = problems(&report);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("TLS key"));

        std::fs::write(&missing_key, "key").unwrap();
        assert!(super::problems(&report).is_empty());
    }
}
