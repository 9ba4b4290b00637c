// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `lace`: print a spoke lacing pattern.
//!
//! ```bash
//! lace --holes 32 -p crosses=3 -p valveReference=right_of_valve
//! lace --method standard --holes 36 -p laceOrder=headsInFirst --json
//! RUST_LOG=spoke_lacing=debug lace --clearance
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use spoke_lacing::clearance::assess_result;
use spoke_lacing::{EngineConfig, MethodRegistry, ParamBag};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lace", version, about = "Compute a bicycle wheel spoke lacing pattern")]
struct Cli {
    /// Lacing method: schraner or standard
    #[arg(short, long, default_value = "schraner")]
    method: String,

    /// Rim hole count; snapped to the nearest count the method supports
    #[arg(long, default_value_t = 32, allow_negative_numbers = true)]
    holes: i64,

    /// Method parameter as KEY=VALUE (repeatable). Values are read as JSON
    /// when they parse, otherwise as strings.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, Value)>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Also report the valve clearance advisory
    #[arg(long)]
    clearance: bool,

    /// JSON engine configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List methods, supported hole counts and parameters, then exit
    #[arg(long)]
    list_methods: bool,
}

fn parse_param(arg: &str) -> Result<(String, Value), String> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{}`", arg));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spoke_lacing=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let registry = MethodRegistry::with_config(config);

    if cli.list_methods {
        return list_methods(&registry, cli.json);
    }

    let method = registry.lookup(&cli.method)?;
    let holes = registry.normalize_hole_count(method.id(), cli.holes)?;
    if holes as i64 != cli.holes {
        tracing::info!(
            requested = cli.holes,
            holes,
            method = %method.id(),
            "hole count not offered by method, using nearest"
        );
    }

    let bag: ParamBag = cli.params.into_iter().collect();
    for key in bag.unknown_keys(method.schema()) {
        tracing::warn!(key, method = %method.id(), "unknown parameter, see --list-methods");
    }
    let result = registry
        .compute(method.id(), holes as i64, &bag)
        .with_context(|| format!("computing {} pattern for {} holes", method.id(), holes))?;
    let clearance = cli
        .clearance
        .then(|| assess_result(&result, &registry.config().clearance));

    if cli.json {
        let mut out = serde_json::to_value(&result)?;
        if let Some(report) = &clearance {
            out["clearance"] = serde_json::to_value(report)?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}H, {} spokes",
        method.id(),
        result.holes,
        result.placements.len()
    );
    println!();
    let table = result.table.clone().unwrap_or_else(|| method.table(&result));
    print!("{}", table.render_text());

    if let Some(report) = clearance {
        let holes: Vec<String> = report.window.iter().map(|h| h.to_string()).collect();
        println!();
        println!(
            "Valve clearance: {} ({} terminations in rim holes {})",
            report.status,
            report.terminations,
            holes.join(", ")
        );
    }
    Ok(())
}

fn list_methods(registry: &MethodRegistry, as_json: bool) -> Result<()> {
    if as_json {
        let methods: Vec<Value> = registry
            .methods()
            .map(|m| {
                json!({
                    "id": m.id(),
                    "supportedHoles": m.supported_holes(),
                    "schema": m.schema(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&methods)?);
        return Ok(());
    }

    for method in registry.methods() {
        let holes: Vec<String> = method.supported_holes().iter().map(|h| h.to_string()).collect();
        println!("{} (holes: {})", method.id(), holes.join(", "));
        for spec in method.schema() {
            println!("  {:<18} {}", spec.key, spec.label);
        }
    }
    Ok(())
}
