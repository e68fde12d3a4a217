//! kie-overlay - Overlay merge CLI tool
//!
//! Merges one or more overlay files onto a baseline and prints the result.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kie_overlay::{
    decode_resources, encode_resources, merge_layers, CustomObject, Environment, Error, Merge,
    Resource, Result,
};

#[derive(Debug, Parser)]
#[command(name = "kie-overlay", version, about = "Overlay merge of KIE operator resources")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = Format::Yaml,
        env = "KIE_OVERLAY_FORMAT"
    )]
    format: Format,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn", env = "KIE_OVERLAY_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge the resource sets of one component
    Object(Inputs),
    /// Merge whole environments (console, smart router, servers)
    Environment(Inputs),
    /// Merge multi-document manifests of mixed kinds
    Manifest(Inputs),
    /// Merge single resources of the same kind
    Resource(Inputs),
}

#[derive(Debug, Args)]
struct Inputs {
    /// Baseline file (YAML or JSON)
    #[arg(short, long)]
    baseline: PathBuf,

    /// Overlay file, applied in the order given
    #[arg(long = "overlay", required = true)]
    overlays: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<()> {
    let rendered = match &cli.command {
        Command::Object(inputs) => render(&merge_typed::<CustomObject>(inputs)?, cli.format)?,
        Command::Environment(inputs) => render(&merge_typed::<Environment>(inputs)?, cli.format)?,
        Command::Manifest(inputs) => render_manifest(&merge_manifest(inputs)?, cli.format)?,
        Command::Resource(inputs) => render(&merge_resource(inputs)?, cli.format)?,
    };

    write_output(&cli.output, &rendered)
}

fn read(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading input");
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    Ok(serde_yaml::from_str(&read(path)?)?)
}

fn merge_typed<T: DeserializeOwned + Merge>(inputs: &Inputs) -> Result<T> {
    let baseline: T = load(&inputs.baseline)?;
    let overlays = inputs
        .overlays
        .iter()
        .map(|path| load(path))
        .collect::<Result<Vec<T>>>()?;

    info!(overlays = overlays.len(), "applying overlays");
    Ok(merge_layers(&baseline, &overlays))
}

fn load_manifest(path: &Path) -> Result<CustomObject> {
    Ok(CustomObject::from_resources(decode_resources(&read(path)?)?))
}

fn merge_manifest(inputs: &Inputs) -> Result<Vec<Resource>> {
    let baseline = load_manifest(&inputs.baseline)?;
    let overlays = inputs
        .overlays
        .iter()
        .map(|path| load_manifest(path))
        .collect::<Result<Vec<_>>>()?;

    info!(
        baseline = baseline.len(),
        overlays = overlays.len(),
        "applying manifest overlays"
    );
    Ok(merge_layers(&baseline, &overlays).into_resources())
}

fn merge_resource(inputs: &Inputs) -> Result<Resource> {
    let baseline: Resource = load(&inputs.baseline)?;
    inputs.overlays.iter().try_fold(baseline, |merged, path| {
        let overlay: Resource = load(path)?;
        merged.merge(&overlay)
    })
}

fn render<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
        Format::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

fn render_manifest(resources: &[Resource], format: Format) -> Result<String> {
    match format {
        Format::Yaml => encode_resources(resources),
        Format::Json => render(&resources, format),
    }
}

fn write_output(output: &str, rendered: &str) -> Result<()> {
    if output == "-" {
        io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|e| Error::io(output, e))
    } else {
        fs::write(output, rendered).map_err(|e| Error::io(output, e))
    }
}
