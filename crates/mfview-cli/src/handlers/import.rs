use anyhow::{Context, Result};
use mfview_index::Database;
use std::path::Path;
use tracing::info;

use crate::commands::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(ctx: &ExecutionContext, path: &Path, renderer: &impl Renderer) -> Result<()> {
    if let Some(parent) = ctx.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut db = Database::open(&ctx.db_path)?;
    let summary = db
        .import_file(path)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    info!(
        newforms = summary.newforms,
        newspaces = summary.newspaces,
        hecke_nf = summary.hecke_nf,
        "import finished"
    );

    renderer.render(presenters::present_import_result(path, &ctx.db_path, summary))
}
