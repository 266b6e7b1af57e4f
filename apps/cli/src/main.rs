// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zoning IFC exporter.
//!
//! Reads a comparison or district scenario from JSON and writes an IFC4
//! STEP file.
//!
//! # Commands
//!
//! - `zoning-ifc comparison <input.json>` - existing vs. proposed lot
//! - `zoning-ifc district <input.json>` - a row of lots in display order
//! - `zoning-ifc verify <file.ifc>` - re-read an exported file and report entity counts

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use zoning_ifc_core::{verify_document, DocumentSummary};
use zoning_ifc_export::{generate_district_ifc, generate_ifc, ExportOptions};

mod config;
mod input;

use config::Config;
use input::{ComparisonInput, DistrictInput};

#[derive(Parser, Debug)]
#[command(name = "zoning-ifc", version, about = "Export zoning scenarios to IFC4")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export an existing vs. proposed comparison
    Comparison(ExportArgs),
    /// Export a district of lots
    District(ExportArgs),
    /// Check an IFC file for well-formed, backward-referencing records
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct ExportArgs {
    /// Scenario JSON file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output path; relative paths resolve against ZONING_IFC_OUTPUT_DIR
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Gap between lots in feet
    #[arg(long)]
    spacing: Option<f64>,

    /// Attach zoning property sets
    #[arg(long, default_value_t = false)]
    properties: bool,

    /// Seed for reproducible GUIDs
    #[arg(long)]
    seed: Option<u64>,

    /// Verify the written file
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,zoning_ifc_export=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    tracing::debug!(output_dir = %config.output_dir.display(), "Loaded configuration");

    match cli.command {
        Command::Comparison(args) => {
            let input: ComparisonInput = read_json(&args.input)?;
            let options = merge_options(input.options, &args, &config);
            let filename = options.filename.clone();
            let text = generate_ifc(&input.existing, &input.proposed, &options)
                .context("Comparison export failed")?;
            let path = output_path(&args, &config, filename.as_deref(), "zoning-comparison.ifc");
            write_output(&path, &text, args.check)
        }
        Command::District(args) => {
            let input: DistrictInput = read_json(&args.input)?;
            let options = merge_options(input.options, &args, &config);
            let filename = options.filename.clone();
            let text = generate_district_ifc(&input.lots, &input.entity_order, &options)
                .context("District export failed")?;
            let path = output_path(&args, &config, filename.as_deref(), "district.ifc");
            write_output(&path, &text, args.check)
        }
        Command::Verify { file } => {
            let summary = verify_file(&file)?;
            let mut counts: Vec<_> = summary.type_counts.iter().collect();
            counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
            for (ifc_type, count) in counts {
                println!("{:>6}  {}", count, ifc_type.as_str());
            }
            println!(
                "{}: {} entities OK ({} spatial, {} elements, {} relationships, {} rooted)",
                file.display(),
                summary.entity_count,
                summary.spatial_count(),
                summary.element_count(),
                summary.relationship_count(),
                summary.rooted_count(),
            );
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid input JSON in {}", path.display()))
}

/// Layer options: input file, then environment, then command-line flags.
fn merge_options(base: Option<ExportOptions>, args: &ExportArgs, config: &Config) -> ExportOptions {
    let mut options = base.unwrap_or_default();
    if options.lot_spacing.is_none() {
        options.lot_spacing = config.lot_spacing;
    }
    if options.author.is_none() {
        options.author = config.author.clone();
    }
    if options.organization.is_none() {
        options.organization = config.organization.clone();
    }

    if let Some(spacing) = args.spacing {
        options.lot_spacing = Some(spacing);
    }
    if args.properties {
        options.include_properties = true;
    }
    if let Some(seed) = args.seed {
        options.guid_seed = Some(seed);
    }
    if let Some(name) = args
        .output
        .as_ref()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
    {
        options.filename = Some(name.to_string());
    }
    options
}

fn output_path(args: &ExportArgs, config: &Config, filename: Option<&str>, default: &str) -> PathBuf {
    let path = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(filename.unwrap_or(default)),
    };
    if path.is_absolute() {
        path
    } else {
        config.output_dir.join(path)
    }
}

fn write_output(path: &Path, text: &str, check: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    let entities = if check {
        verify_file(path)?.entity_count
    } else {
        text.lines().filter(|line| line.starts_with('#')).count()
    };
    println!("Wrote {} entities to {}", entities, path.display());
    Ok(())
}

fn verify_file(path: &Path) -> Result<DocumentSummary> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    verify_document(&text).with_context(|| format!("{} is not a valid export", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<&str>) -> ExportArgs {
        ExportArgs {
            input: PathBuf::from("scenario.json"),
            output: output.map(PathBuf::from),
            spacing: None,
            properties: false,
            seed: None,
            check: false,
        }
    }

    fn config() -> Config {
        Config {
            output_dir: PathBuf::from("out"),
            lot_spacing: Some(15.0),
            author: Some("Env Author".to_string()),
            organization: None,
        }
    }

    #[test]
    fn test_flags_override_environment_and_input() {
        let base = ExportOptions {
            lot_spacing: Some(5.0),
            organization: Some("Input Org".to_string()),
            ..Default::default()
        };
        let mut args = args(Some("result.ifc"));
        args.spacing = Some(30.0);
        args.properties = true;
        args.seed = Some(7);

        let options = merge_options(Some(base), &args, &config());
        assert_eq!(options.lot_spacing, Some(30.0));
        assert_eq!(options.author.as_deref(), Some("Env Author"));
        assert_eq!(options.organization.as_deref(), Some("Input Org"));
        assert_eq!(options.filename.as_deref(), Some("result.ifc"));
        assert!(options.include_properties);
        assert_eq!(options.guid_seed, Some(7));
    }

    #[test]
    fn test_environment_fills_missing_options() {
        let options = merge_options(None, &args(None), &config());
        assert_eq!(options.lot_spacing, Some(15.0));
        assert_eq!(options.filename, None);
        assert!(!options.include_properties);
    }

    #[test]
    fn test_output_path_resolution() {
        let config = config();
        assert_eq!(
            output_path(&args(None), &config, None, "district.ifc"),
            PathBuf::from("out/district.ifc")
        );
        assert_eq!(
            output_path(&args(None), &config, Some("named.ifc"), "district.ifc"),
            PathBuf::from("out/named.ifc")
        );
        assert_eq!(
            output_path(&args(Some("sub/x.ifc")), &config, None, "district.ifc"),
            PathBuf::from("out/sub/x.ifc")
        );
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "zoning-ifc",
            "district",
            "lots.json",
            "-o",
            "d.ifc",
            "--spacing",
            "4",
            "--properties",
            "--check",
        ])
        .unwrap();
        match cli.command {
            Command::District(args) => {
                assert_eq!(args.input, PathBuf::from("lots.json"));
                assert_eq!(args.spacing, Some(4.0));
                assert!(args.properties && args.check);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
