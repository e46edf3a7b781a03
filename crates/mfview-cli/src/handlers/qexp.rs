use anyhow::Result;
use mfview_engine::{QexpFormat, WebNewform};

use crate::commands::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(
    ctx: &ExecutionContext,
    label: &str,
    format: QexpFormat,
    prec_max: usize,
    renderer: &impl Renderer,
) -> Result<()> {
    let db = ctx.db()?;
    let form = WebNewform::by_label(&db, label, &ctx.links())?;

    renderer.render(presenters::present_qexp(&form, format, prec_max))
}
