use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "onm",
    about = "Object node mapping — build, inspect, and query persisted mappings",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with `persist_dir` and `mapping_filename`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the mapping file (overrides the config)
    #[arg(long, global = true)]
    pub persist_dir: Option<PathBuf>,

    /// Mapping filename inside the persist directory (overrides the config)
    #[arg(long, global = true)]
    pub filename: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a mapping from one object literal per line and persist it
    Build(BuildArgs),
    /// List every persisted object with its key
    Inspect(InspectArgs),
    /// Recover the object behind a node text
    Lookup(LookupArgs),
    /// Print the text node produced for each persisted object
    Nodes(NodesArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Input file; each non-blank line is one object literal
    pub input: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {}

#[derive(Args)]
pub struct LookupArgs {
    /// Node text, exactly as produced for the object
    #[arg(required_unless_present = "key", conflicts_with = "key")]
    pub text: Option<String>,
    /// Hex object key, as printed by `inspect`
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Args)]
pub struct NodesArgs {}
