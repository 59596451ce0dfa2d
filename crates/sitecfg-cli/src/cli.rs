//! CLI argument parsing using clap derive

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use sitecfg_core::{ContentKind, ExportFormat};

/// sitecfg - Resolve layered static-site settings
#[derive(Parser, Debug)]
#[command(name = "sitecfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Working directory holding mounted siteconf/publishconf files
    #[arg(short = 'C', long, global = true, env = "SITECFG_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Apply the publish layers on top of the base layers
    #[arg(long, global = true, env = "SITECFG_PUBLISH")]
    pub publish: bool,

    /// Extra layer file applied after all others (repeatable)
    #[arg(short, long = "layer", global = true, value_name = "FILE")]
    pub layers: Vec<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved settings
    ///
    /// Examples:
    ///   sitecfg resolve                 # Python settings module
    ///   sitecfg --publish resolve -f json
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Python)]
        format: OutputFormat,
    },

    /// Print one resolved setting
    Get {
        /// Setting name, e.g. SITEURL
        name: String,

        /// Print the value as JSON even when it is a string
        #[arg(long)]
        json: bool,
    },

    /// Show which layer each setting came from
    Explain {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the layer sources in precedence order
    Layers,

    /// Decode the settings and check them for operator mistakes
    Check {
        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,
    },

    /// Render the public URL and output path for a piece of content
    ///
    /// Examples:
    ///   sitecfg url article --slug hello --date 2024-05-01
    ///   sitecfg url page --slug about
    Url {
        /// Content kind
        #[arg(value_enum)]
        kind: KindArg,

        /// Content slug
        #[arg(long)]
        slug: String,

        /// Publication date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Last-modified date (YYYY-MM-DD)
        #[arg(long)]
        modified: Option<NaiveDate>,

        /// Content language; defaults to DEFAULT_LANG
        #[arg(long)]
        lang: Option<String>,

        /// Category name
        #[arg(long)]
        category: Option<String>,

        /// Author name; defaults to AUTHOR
        #[arg(long)]
        author: Option<String>,
    },

    /// Write the resolved settings to a file
    ///
    /// The format follows the file extension (.py, .toml, .json) unless
    /// --format is given.
    Export {
        /// Output file
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Export formats selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Python,
    Toml,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Python => ExportFormat::Python,
            OutputFormat::Toml => ExportFormat::Toml,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Content kinds selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Article,
    Page,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Article => ContentKind::Article,
            KindArg::Page => ContentKind::Page,
        }
    }
}
