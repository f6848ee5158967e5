//! hal CLI: inspect HAL+JSON documents.
//!
//! Commands: inspect, links, property, embedded. Every command reads a
//! document from FILE, or from stdin when FILE is omitted, and prints JSON.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hal_reader::{HalReader, ParseOptions, Resource};
use serde_json::{json, Map, Value};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "hal")]
#[command(version)]
#[command(about = "Inspect HAL+JSON documents")]
struct Cli {
    /// Deepest allowed level of embedded resources
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// TOML file with parser options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Summarize the whole resource tree
    #[command(alias = "i")]
    Inspect { file: Option<PathBuf> },
    /// List the links declared under a relation
    #[command(alias = "l")]
    Links { rel: String, file: Option<PathBuf> },
    /// Show one property and its kind
    #[command(alias = "p")]
    Property { name: String, file: Option<PathBuf> },
    /// Summarize the resources embedded under a relation
    #[command(alias = "e")]
    Embedded { rel: String, file: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        println!(
            "hal v{} — HAL+JSON document inspector",
            env!("CARGO_PKG_VERSION")
        );
        println!("Run `hal --help` for usage.");
        return Ok(());
    };

    let reader = HalReader::with_options(load_options(&cli)?);

    let output = match command {
        Commands::Inspect { file } => summarize(&read_resource(&reader, file.as_deref())?),
        Commands::Links { rel, file } => {
            let resource = read_resource(&reader, file.as_deref())?;
            json!(resource.links(rel))
        }
        Commands::Property { name, file } => {
            let resource = read_resource(&reader, file.as_deref())?;
            let value = resource.property(name);
            json!({
                "name": name,
                "kind": value.kind(),
                "value": value.as_str(),
            })
        }
        Commands::Embedded { rel, file } => {
            let resource = read_resource(&reader, file.as_deref())?;
            Value::Array(resource.embedded(rel).iter().map(summarize).collect())
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Options from `--config`, with `--max-depth` taking precedence.
fn load_options(cli: &Cli) -> Result<ParseOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ParseOptions::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    debug!(?options, "parser options");
    Ok(options)
}

fn read_resource(reader: &HalReader, file: Option<&Path>) -> Result<Resource> {
    match file {
        Some(path) => {
            let handle =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            reader
                .read(BufReader::new(handle))
                .with_context(|| format!("Failed to read HAL document {}", path.display()))
        }
        None => reader
            .read(io::stdin().lock())
            .context("Failed to read HAL document from stdin"),
    }
}

fn summarize(resource: &Resource) -> Value {
    let links: Map<String, Value> = resource
        .all_links()
        .map(|(rel, links)| (rel.to_string(), json!(links)))
        .collect();
    let properties: Map<String, Value> = resource
        .properties()
        .map(|(name, value)| (name.to_string(), json!(value)))
        .collect();
    let embedded: Map<String, Value> = resource
        .embedded_relations()
        .map(|(rel, resources)| {
            (
                rel.to_string(),
                Value::Array(resources.iter().map(summarize).collect()),
            )
        })
        .collect();

    json!({
        "self": resource.self_link().map(|link| link.href.as_str()),
        "links": links,
        "namespaces": resource.namespaces(),
        "properties": properties,
        "embedded": embedded,
    })
}
