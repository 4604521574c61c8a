//! Check command — validate a file and print the marker protocol.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prose_vet_core::config::Config;
use prose_vet_core::{ValidationContext, protocol, run_validation};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to validate.
    pub file: Utf8PathBuf,

    /// Checkers to run (comma-separated). Omit for all.
    #[arg(long, value_delimiter = ',')]
    pub checkers: Option<Vec<String>>,
}

/// Validate a file's content and report findings.
///
/// Exits non-zero when any finding is produced, so the command can gate
/// CI pipelines and pre-commit hooks.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checkers = ?args.checkers, "executing check command");

    let content = super::read_input_file(&args.file, max_input)?;

    let ctx = match config.extra_words {
        Some(ref words) => ValidationContext::with_extra_words(words),
        None => ValidationContext::builtin(),
    };

    // CLI flag wins over the config file's checker list.
    let enabled = args.checkers.as_deref().or(config.checkers.as_deref());

    let report = run_validation(args.file.as_str(), &content, &ctx, enabled)
        .with_context(|| format!("failed to validate {}", args.file))?;

    for diag in &report.diagnostics {
        eprintln!(
            "{}: checker '{}' failed: {}",
            "warning".yellow(),
            diag.checker,
            diag.detail
        );
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.pass {
            bail!(
                "{} has {} validation issue(s)",
                args.file,
                report.findings.len()
            );
        }
        return Ok(());
    }

    if report.pass {
        println!("✅ No validation issues found");
        return Ok(());
    }

    print!("{}", protocol::render(&report));
    bail!(
        "{} has {} validation issue(s)",
        args.file,
        report.findings.len()
    );
}
