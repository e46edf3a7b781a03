use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::presentation::ViewMode;
use crate::types::{EmbedKind, LogLevel, OutputFormat, QexpStyle};

#[derive(Parser)]
#[command(name = "mfview")]
#[command(about = "Display modular newform records from a local store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $MFVIEW_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load newforms, newspaces and Hecke eigenvalues from a JSON bundle
    Import {
        /// Path to a bundle: {"newforms": [...], "newspaces": [...], "hecke_nf": [...]}
        path: PathBuf,
    },

    /// Show the page attributes of a newform
    Show {
        /// Newform label, e.g. 1.12.a.a
        label: String,

        #[command(flatten)]
        view: ViewModeArgs,
    },

    /// Print the q-expansion of a newform
    Qexp {
        label: String,

        #[arg(long, default_value = "oneline")]
        style: QexpStyle,

        /// Maximum precision (defaults to qexp_prec_max from config.toml)
        #[arg(long)]
        prec: Option<usize>,
    },

    /// Tabulate complex embeddings or Satake parameters
    Embed {
        label: String,

        /// Embedding number, starting at 1
        #[arg(long, short = 'm', default_value_t = 1)]
        embedding: usize,

        #[arg(long, default_value = "embed")]
        kind: EmbedKind,

        /// First index (inclusive)
        #[arg(long, default_value_t = 1)]
        from: u64,

        /// Last index (exclusive)
        #[arg(long, default_value_t = 11)]
        to: u64,

        /// Decimal places (defaults to float_prec from config.toml)
        #[arg(long)]
        prec: Option<usize>,
    },

    /// List stored newform labels
    Labels {
        #[arg(long)]
        level: Option<u32>,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Minimal output (title and label only)", group = "view_mode")]
    pub quiet: bool,

    #[arg(long, help = "Verbose output (links and Hecke ring data)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> ViewMode {
        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
