use anyhow::Result;
use mfview_engine::WebNewform;

use crate::commands::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(ctx: &ExecutionContext, label: &str, renderer: &impl Renderer) -> Result<()> {
    let db = ctx.db()?;
    let links = ctx.links();
    let form = WebNewform::by_label(&db, label, &links)?;

    renderer.render(presenters::present_newform(
        &form,
        &links,
        ctx.config.qexp_prec_max,
    ))
}
