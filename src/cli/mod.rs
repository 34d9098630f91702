//! CLI commands and argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pipewiz - Question catalog for a CI/CD scaffolding wizard
#[derive(Parser, Debug)]
#[command(name = "pipewiz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML or JSON) holding pre-supplied values
    #[arg(long, global = true, env = "PIPEWIZ_OPTIONS")]
    pub options_file: Option<PathBuf>,

    /// Supply an option as key=value (overrides the options file)
    #[arg(long = "set", short = 's', global = true, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available flows
    Flows,

    /// Describe the questions in the catalog
    Questions {
        /// Only the questions of this flow, in order
        #[arg(short, long, value_enum)]
        flow: Option<FlowArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which questions would be asked, without asking
    Plan {
        /// Flow to evaluate
        #[arg(short, long, value_enum, default_value = "app")]
        flow: FlowArg,

        /// Answers already collected (YAML or JSON)
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a flow non-interactively from an answer file
    Run {
        /// Flow to resolve
        #[arg(short, long, value_enum, default_value = "app")]
        flow: FlowArg,

        /// Answers for every visible question (YAML or JSON)
        #[arg(short, long)]
        answers: PathBuf,

        /// Use question defaults for missing answers
        #[arg(long)]
        defaults: bool,

        /// Only print the answers that would be stored in a profile
        #[arg(long)]
        stored_only: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

/// Flow argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FlowArg {
    Profile,
    App,
    Git,
    Azure,
    Docker,
    K8s,
}

impl From<FlowArg> for crate::Flow {
    fn from(arg: FlowArg) -> Self {
        match arg {
            FlowArg::Profile => crate::Flow::Profile,
            FlowArg::App => crate::Flow::App,
            FlowArg::Git => crate::Flow::Git,
            FlowArg::Azure => crate::Flow::Azure,
            FlowArg::Docker => crate::Flow::Docker,
            FlowArg::K8s => crate::Flow::K8s,
        }
    }
}

/// Output format for resolved answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
