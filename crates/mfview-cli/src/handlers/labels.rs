use anyhow::Result;

use crate::commands::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(
    ctx: &ExecutionContext,
    level: Option<u32>,
    limit: usize,
    renderer: &impl Renderer,
) -> Result<()> {
    let db = ctx.db()?;
    let labels = db.list_labels(level, limit)?;
    let total = db.count_newforms()?;

    renderer.render(presenters::present_label_list(level, labels, total))
}
