//! Command-line access to the CDMI vocabulary registry.
//!
//! Resolves symbols and wire values, lists tables and capabilities, prints or
//! checks registry snapshots, and validates CDMI JSON documents against the
//! closed vocabulary. Output goes to stdout; logs and errors go to stderr.

use anyhow::{Context, Result, bail};
use cdmi_vocab::error_catalog::ErrorCatalog;
use cdmi_vocab::snapshot::{load_snapshot_schema, read_snapshot, validate_snapshot};
use cdmi_vocab::{
    CapabilityKind, Registry, init_global, validate_capability_keys, validate_metadata_keys,
};
use serde_json::Value;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse(env::args_os().skip(1))?;
    init_tracing(cli.verbose)?;

    let registry = init_global().context("built-in CDMI vocabulary failed validation")?;
    debug!(command = ?cli.command, "dispatching");
    cli.command.execute(registry)
}

// Stderr stays quiet for scripted use unless something goes wrong.
fn init_tracing(verbose: bool) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")
}

struct Cli {
    verbose: bool,
    command: Command,
}

#[derive(Debug)]
enum Command {
    Tables,
    Show { table: String },
    Wire { table: String, symbol: String },
    Symbol { table: String, wire: String },
    Capabilities { kind: CapabilityKind },
    Has { kind: CapabilityKind, symbol: String },
    Errors { catalog: Option<PathBuf> },
    Snapshot { validate: bool },
    CheckSnapshot { path: PathBuf },
    CheckMetadata { source: InputSource },
    CheckCapabilities { kind: CapabilityKind, source: InputSource },
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read_json(&self) -> Result<Value> {
        let raw = match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read(path).with_context(|| format!("reading {}", path.display()))?
            }
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                buf
            }
        };
        serde_json::from_slice(&raw).context("failed to parse JSON input")
    }
}

impl Cli {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut verbose = false;
        let mut words = Vec::new();
        for arg_os in args {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "-h" | "--help" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                _ => words.push(arg),
            }
        }

        let mut words = words.into_iter();
        let Some(name) = words.next() else {
            bail!("missing command\n{}", usage());
        };
        let rest: Vec<String> = words.collect();
        let command = match (name.as_str(), rest.as_slice()) {
            ("tables", []) => Command::Tables,
            ("show", [table]) => Command::Show {
                table: table.clone(),
            },
            ("wire", [table, symbol]) => Command::Wire {
                table: table.clone(),
                symbol: symbol.clone(),
            },
            ("symbol", [table, wire]) => Command::Symbol {
                table: table.clone(),
                wire: wire.clone(),
            },
            ("capabilities", [kind]) => Command::Capabilities {
                kind: kind.parse()?,
            },
            ("has", [kind, symbol]) => Command::Has {
                kind: kind.parse()?,
                symbol: symbol.clone(),
            },
            ("errors", []) => Command::Errors { catalog: None },
            ("errors", [flag, path]) if flag == "--catalog" => Command::Errors {
                catalog: Some(PathBuf::from(path)),
            },
            ("snapshot", []) => Command::Snapshot { validate: false },
            ("snapshot", [flag]) if flag == "--validate" => Command::Snapshot { validate: true },
            ("check-snapshot", [path]) => Command::CheckSnapshot {
                path: PathBuf::from(path),
            },
            ("check-metadata", source) => Command::CheckMetadata {
                source: parse_source(source)?,
            },
            ("check-capabilities", [kind, source @ ..]) => Command::CheckCapabilities {
                kind: kind.parse()?,
                source: parse_source(source)?,
            },
            (other, _) => bail!("unknown command or arguments: {other}\n{}", usage()),
        };

        Ok(Cli { verbose, command })
    }
}

fn parse_source(args: &[String]) -> Result<InputSource> {
    match args {
        [] => Ok(InputSource::Stdin),
        [flag] if flag == "--stdin" => Ok(InputSource::Stdin),
        [flag, path] if flag == "--file" => Ok(InputSource::File(PathBuf::from(path))),
        _ => bail!("expected --file PATH or --stdin"),
    }
}

impl Command {
    fn execute(&self, registry: &Registry) -> Result<i32> {
        match self {
            Command::Tables => {
                for table in registry.tables() {
                    println!("{}\t{}", table.id(), table.len());
                }
            }
            Command::Show { table } => {
                for entry in registry.table_named(table)?.entries() {
                    println!("{}\t{}", entry.symbol, entry.wire);
                }
            }
            Command::Wire { table, symbol } => {
                println!("{}", registry.wire_value_of(table, symbol)?);
            }
            Command::Symbol { table, wire } => {
                println!("{}", registry.symbolic_name_of_wire_value(table, wire)?);
            }
            Command::Capabilities { kind } => {
                for entry in registry.capabilities_for(*kind) {
                    println!("{}", entry.symbol);
                }
            }
            Command::Has { kind, symbol } => {
                return Ok(if registry.has_capability(*kind, symbol) { 0 } else { 1 });
            }
            Command::Errors { catalog } => {
                let catalog = catalog
                    .as_deref()
                    .map(|path| ErrorCatalog::load(path, registry))
                    .transpose()?;
                for code in registry.all_error_codes() {
                    match catalog.as_ref().and_then(|c| c.describe(code)) {
                        Some(desc) => println!("{code}\t{}\t{}", desc.http_status, desc.message),
                        None => println!("{code}"),
                    }
                }
            }
            Command::Snapshot { validate } => {
                let snapshot = registry.snapshot();
                if *validate {
                    let schema = load_snapshot_schema()?;
                    validate_snapshot(&snapshot, &schema)?;
                }
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            Command::CheckSnapshot { path } => {
                let schema = load_snapshot_schema()?;
                let stored = read_snapshot(path, &schema)?;
                return Ok(report(registry.drift_from(&stored)));
            }
            Command::CheckMetadata { source } => {
                let value = source.read_json()?;
                return Ok(report(validate_metadata_keys(registry, &value)));
            }
            Command::CheckCapabilities { kind, source } => {
                let value = source.read_json()?;
                return Ok(report(validate_capability_keys(registry, *kind, &value)));
            }
        }
        Ok(0)
    }
}

/// Print findings to stdout and turn them into an exit code.
fn report(findings: Vec<String>) -> i32 {
    for finding in &findings {
        println!("{finding}");
    }
    if findings.is_empty() { 0 } else { 1 }
}

fn usage() -> &'static str {
    "Usage: cdmi-vocab [-v|--verbose] <command>\n\
\n\
Commands:\n\
  tables                                   list tables with entry counts\n\
  show <table>                             print symbol and wire value of every entry\n\
  wire <table> <symbol>                    resolve a symbolic name to its wire value\n\
  symbol <table> <wire>                    resolve a wire value to its symbolic name\n\
  capabilities <kind>                      list capabilities of a resource kind\n\
  has <kind> <symbol>                      exit 0 when the kind has the capability\n\
  errors [--catalog PATH]                  list error references\n\
  snapshot [--validate]                    print the registry snapshot as JSON\n\
  check-snapshot <PATH>                    report drift between PATH and the registry\n\
  check-metadata [--file PATH|--stdin]     check reserved metadata keys\n\
  check-capabilities <kind> [--file PATH|--stdin]\n\
\n\
Kinds: container, data_object, data_system, domain, queue, system_wide\n"
}
