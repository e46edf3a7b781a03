use anyhow::Result;
use mfview_engine::{EmbedFormat, WebNewform};

use crate::commands::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub struct EmbedRequest {
    pub embedding: usize,
    pub format: EmbedFormat,
    pub from: u64,
    pub to: u64,
    pub prec: usize,
}

pub fn handle(
    ctx: &ExecutionContext,
    label: &str,
    request: EmbedRequest,
    renderer: &impl Renderer,
) -> Result<()> {
    let db = ctx.db()?;
    let form = WebNewform::by_label(&db, label, &ctx.links())?;

    let dim = form.dim() as usize;
    if request.embedding == 0 || request.embedding > dim {
        anyhow::bail!(
            "{} has {} embedding(s); got --embedding {}",
            label,
            dim,
            request.embedding
        );
    }

    renderer.render(presenters::present_embed_table(
        &form,
        request.embedding,
        request.format,
        request.from,
        request.to,
        request.prec,
    ))
}
