use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use graphdata_contract::GraphFormat;

// CLI Arguments
#[derive(Debug, Parser)]
#[command(name = "graphcheck", author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file with log settings and a validation policy
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a graph document's shape and run the validation pass
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// Do not require edge endpoints to match node ids
        #[arg(long)]
        skip_references: bool,
    },

    /// Re-encode a graph document with absent collections filled in
    Normalize {
        #[command(flatten)]
        input: InputArgs,

        /// Output format, defaults to the input format
        #[arg(long, value_enum)]
        to: Option<FormatArg>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print node, edge and cluster counts as JSON
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to the graph document
    pub file: PathBuf,

    /// Input format, inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl From<FormatArg> for GraphFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => GraphFormat::Json,
            FormatArg::Yaml => GraphFormat::Yaml,
        }
    }
}
