use anyhow::Result;
use mfview_engine::LmfdbLinks;
use mfview_index::Database;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{CONFIG_FILE, Config, resolve_workspace_path};
use crate::logging;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

/// Paths and settings every handler needs
pub struct ExecutionContext {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub config: Config,
}

impl ExecutionContext {
    pub fn resolve(explicit_data_dir: Option<&str>) -> Result<Self> {
        let data_dir = resolve_workspace_path(explicit_data_dir)?;
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        let db_path = config.database_path(&data_dir);
        Ok(Self {
            data_dir,
            db_path,
            config,
        })
    }

    /// Open the store for reading; it must already have been created by `import`.
    pub fn db(&self) -> Result<Database> {
        if !self.db_path.exists() {
            anyhow::bail!(
                "No database at {}. Run `mfview import <bundle.json>` first",
                self.db_path.display()
            );
        }
        Ok(Database::open(&self.db_path)?)
    }

    pub fn links(&self) -> LmfdbLinks {
        LmfdbLinks::new(self.config.base_url.clone())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::resolve(cli.data_dir.as_deref())?;
    debug!(data_dir = %ctx.data_dir.display(), db = %ctx.db_path.display(), "resolved workspace");

    let json = cli.format == OutputFormat::Json;

    let Some(command) = cli.command else {
        show_guidance(&ctx.db_path);
        return Ok(());
    };

    match command {
        Commands::Import { path } => {
            handlers::import::handle(&ctx, &path, &ConsoleRenderer::new(json))
        }

        Commands::Show { label, view } => {
            let renderer = ConsoleRenderer::new(json).with_mode(view.resolve());
            handlers::show::handle(&ctx, &label, &renderer)
        }

        Commands::Qexp { label, style, prec } => handlers::qexp::handle(
            &ctx,
            &label,
            style.into(),
            prec.unwrap_or(ctx.config.qexp_prec_max),
            &ConsoleRenderer::new(json),
        ),

        Commands::Embed {
            label,
            embedding,
            kind,
            from,
            to,
            prec,
        } => handlers::embed::handle(
            &ctx,
            &label,
            handlers::embed::EmbedRequest {
                embedding,
                format: kind.into(),
                from,
                to,
                prec: prec.unwrap_or(ctx.config.float_prec),
            },
            &ConsoleRenderer::new(json),
        ),

        Commands::Labels { level, limit } => {
            handlers::labels::handle(&ctx, level, limit, &ConsoleRenderer::new(json))
        }
    }
}

fn show_guidance(db_path: &Path) {
    println!("mfview - modular newform viewer\n");

    if !db_path.exists() {
        println!("Get started:");
        println!("  mfview import <bundle.json>       # Load newforms into {}", db_path.display());
        println!();
    } else {
        println!("Quick commands:");
        println!("  mfview labels                     # List stored newforms");
        println!("  mfview show <LABEL>               # Show a newform page");
        println!("  mfview qexp <LABEL> --style all   # Full q-expansion");
        println!("  mfview embed <LABEL> --kind satake --from 2 --to 30");
        println!();
    }

    println!("For more commands:");
    println!("  mfview --help");
}
