//! recast CLI - bulk regex-driven source migration
//!
//! With no arguments, runs every built-in rule set in registry order
//! against the current working directory. Rule sets rewrite files in
//! place; each file is written atomically (sibling temp file, then
//! rename), and a file no rule matched is left untouched.
//!
//! Built-in rule sets (OpenDJ 2 to OpenDJ 3 migration):
//! - messages: org.opends.messages to forgerock i18n Localizable types
//! - types: core LDAP types to org.forgerock.opendj.ldap
//! - dn_type: DN imports and DN.NULL_DN call sites
//! - exceptions: admin client exceptions to ErrorResultException
//! - loggers: DebugTracer / java.util.logging to slf4j
//! - i18n_loggers: ErrorLogger.logError blocks to LocalizedLogger

mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use output::{OutputFormat, Reporter};
use recast_core::{run_rule_set, RuleSet, RuleSetSpec};
use recast_rules::Registry;

#[derive(Parser)]
#[command(name = "recast")]
#[command(version = "0.1.0")]
#[command(about = "Bulk regex-driven source code migration")]
struct Cli {
    /// Run only the named rule sets (run order is preserved)
    #[arg(long, short = 'r', value_name = "NAME")]
    ruleset: Vec<String>,

    /// Load rule sets from a TOML file instead of the built-ins
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Apply rules in memory and report counts without writing files
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// List available rule sets and exit
    #[arg(long)]
    list: bool,

    /// Emit the run summary as JSON
    #[arg(long)]
    json: bool,

    /// List each touched file
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Rule sets come from a TOML file or the built-in registry.
    let specs: Vec<RuleSetSpec> = match &cli.config {
        Some(path) => config::load(path)?,
        None => Registry::new().all().to_vec(),
    };

    if cli.list {
        println!("{}", "Available rule sets:".bold());
        for spec in &specs {
            println!(
                "  {} - {} rules over {} directories",
                spec.name.green(),
                spec.rules.len(),
                spec.directories.len()
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selected = select(specs, &cli.ruleset)?;

    // Compile everything up front: a malformed pattern in the last
    // rule set must abort before the first one rewrites anything.
    let rule_sets: Vec<RuleSet> = selected
        .iter()
        .map(RuleSetSpec::compile)
        .collect::<Result<_, _>>()?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut reporter = Reporter::new(format, cli.verbose, cli.dry_run);

    for rule_set in &rule_sets {
        reporter.announce(rule_set);
        let summary = run_rule_set(rule_set, cli.dry_run)?;
        reporter.report(summary);
    }

    reporter.finish();
    Ok(ExitCode::SUCCESS)
}

/// Filter specs by the requested names, keeping run order
fn select(specs: Vec<RuleSetSpec>, requested: &[String]) -> Result<Vec<RuleSetSpec>> {
    if requested.is_empty() {
        return Ok(specs);
    }

    for name in requested {
        if !specs.iter().any(|spec| &spec.name == name) {
            anyhow::bail!("Unknown rule set '{}'. Use --list to see available rule sets.", name);
        }
    }

    Ok(specs
        .into_iter()
        .filter(|spec| requested.contains(&spec.name))
        .collect())
}
