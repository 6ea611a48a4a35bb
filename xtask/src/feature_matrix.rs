//! Feature matrix runner
//!
//! This module provides the `feature-matrix` subcommand, which runs a cargo
//! command once per feature combination listed in a YAML file.

use anyhow::{Context, Result, bail};
use clap::Args;
use seqmap::sequence::{find_first_matching, unique};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

/// Environment variable consulted for the toolchain when `--toolchain` is absent
const TOOLCHAIN_ENV: &str = "SEQMAP_TOOLCHAIN";

/// Arguments for the feature-matrix subcommand
#[derive(Args, Debug)]
pub struct FeatureMatrixArgs {
    /// Matrix YAML file path
    #[arg(long, short = 'c', default_value = "xtask/feature-matrix.yaml")]
    pub config: PathBuf,

    /// Override toolchain (e.g. stable, nightly, 1.92.0)
    #[arg(long)]
    pub toolchain: Option<String>,

    /// Run only the named entries (repeatable)
    #[arg(long)]
    pub only: Vec<String>,

    /// Print the cargo commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Run every entry before reporting failures
    #[arg(long)]
    pub keep_going: bool,
}

/// Matrix configuration from YAML
#[derive(Debug, Deserialize)]
struct MatrixConfig {
    name: Option<String>,
    toolchain: Option<String>,
    #[serde(default)]
    entries: Vec<MatrixEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct MatrixEntry {
    name: String,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    no_default_features: bool,
    #[serde(default = "default_command")]
    command: String,
    #[serde(default)]
    extra_args: Vec<String>,
}

fn default_command() -> String {
    "test".to_string()
}

impl MatrixEntry {
    /// Arguments passed to cargo, after the optional `+toolchain`
    fn cargo_args(&self) -> Vec<String> {
        let mut args: Vec<String> = self.command.split_whitespace().map(str::to_string).collect();
        args.push("--package".to_string());
        args.push("seqmap".to_string());

        if self.no_default_features {
            args.push("--no-default-features".to_string());
        }

        let features = unique(
            self.features
                .iter()
                .map(|feature| feature.trim())
                .filter(|feature| !feature.is_empty()),
        );
        if !features.is_empty() {
            args.push("--features".to_string());
            args.push(features.join(","));
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Priority: CLI > Environment > Matrix YAML > none
fn resolve_toolchain(
    cli: Option<&str>,
    environment: Option<String>,
    config: Option<&str>,
) -> Option<String> {
    let is_set = |toolchain: &str| !toolchain.trim().is_empty();
    cli.filter(|toolchain| is_set(*toolchain))
        .map(str::to_string)
        .or_else(|| environment.filter(|toolchain| is_set(toolchain.as_str())))
        .or_else(|| config.filter(|toolchain| is_set(*toolchain)).map(str::to_string))
}

/// Keep the entries named by `--only`, in matrix order
fn select_entries(entries: &[MatrixEntry], only: &[String]) -> Result<Vec<MatrixEntry>> {
    if only.is_empty() {
        return Ok(entries.to_vec());
    }

    let is_known = |name: &String| entries.iter().any(|entry| &entry.name == name);
    if let Some(unknown) = find_first_matching(only, |name| !is_known(*name)) {
        bail!("Unknown matrix entry: {unknown}");
    }

    Ok(entries
        .iter()
        .filter(|entry| only.contains(&entry.name))
        .cloned()
        .collect())
}

fn parse_config(content: &str) -> Result<MatrixConfig> {
    let config: MatrixConfig =
        serde_yaml::from_str(content).context("Failed to parse matrix YAML")?;

    if config.entries.is_empty() {
        bail!("Matrix has no entries");
    }

    let names = unique(config.entries.iter().map(|entry| entry.name.as_str()));
    if names.len() != config.entries.len() {
        bail!("Matrix entry names must be unique");
    }

    Ok(config)
}

/// Get the project root directory
fn project_root() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from);

    // xtask is in project_root/xtask, so go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map_or_else(|| manifest_dir.clone(), Path::to_path_buf)
    } else {
        manifest_dir
    }
}

fn render_command(toolchain: Option<&str>, args: &[String]) -> String {
    let mut rendered = String::from("cargo");
    if let Some(toolchain) = toolchain {
        rendered.push_str(" +");
        rendered.push_str(toolchain);
    }
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Run one matrix entry, returning whether cargo succeeded
fn run_entry(root: &Path, toolchain: Option<&str>, entry: &MatrixEntry) -> Result<bool> {
    let args = entry.cargo_args();
    eprintln!("[{}] {}", entry.name, render_command(toolchain, &args));

    let mut cmd = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()));
    if let Some(toolchain) = toolchain {
        cmd.arg(format!("+{toolchain}"));
    }
    cmd.args(&args).current_dir(root);

    let started = Instant::now();
    let status = cmd
        .status()
        .with_context(|| format!("Failed to run cargo for entry '{}'", entry.name))?;
    eprintln!(
        "[{}] {} in {:.1}s",
        entry.name,
        if status.success() { "ok" } else { "FAILED" },
        started.elapsed().as_secs_f64()
    );

    Ok(status.success())
}

/// Main entry point for feature-matrix command
pub fn run(args: FeatureMatrixArgs) -> Result<()> {
    let root = project_root();

    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        root.join(&args.config)
    };

    if !config_path.exists() {
        bail!("Matrix file not found: {}", config_path.display());
    }

    let content = fs::read_to_string(&config_path).context("Failed to read matrix file")?;
    let config = parse_config(&content)?;

    let toolchain = resolve_toolchain(
        args.toolchain.as_deref(),
        env::var(TOOLCHAIN_ENV).ok(),
        config.toolchain.as_deref(),
    );
    let entries = select_entries(&config.entries, &args.only)?;

    eprintln!("==============================================");
    eprintln!("  Feature Matrix Runner (xtask)");
    eprintln!("==============================================");
    eprintln!();
    eprintln!("Configuration:");
    eprintln!("  Matrix:     {}", config_path.display());
    if let Some(name) = &config.name {
        eprintln!("  Name:       {name}");
    }
    eprintln!("  Toolchain:  {}", toolchain.as_deref().unwrap_or("(default)"));
    eprintln!("  Entries:    {}", entries.len());
    eprintln!("  Dry Run:    {}", args.dry_run);
    eprintln!("  Keep Going: {}", args.keep_going);
    eprintln!();

    if args.dry_run {
        for entry in &entries {
            println!("{}", render_command(toolchain.as_deref(), &entry.cargo_args()));
        }
        return Ok(());
    }

    let mut failed = Vec::new();
    for entry in &entries {
        if !run_entry(&root, toolchain.as_deref(), entry)? {
            failed.push(entry.name.clone());
            if !args.keep_going {
                break;
            }
        }
    }

    eprintln!();
    eprintln!("==============================================");
    eprintln!("  Feature Matrix Complete");
    eprintln!("==============================================");
    eprintln!();

    if !failed.is_empty() {
        bail!("Matrix entries failed: {}", failed.join(", "));
    }

    eprintln!("  All {} entries passed", entries.len());
    Ok(())
}
