use mfview_engine::{EmbedFormat, WebNewform};

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, EmbedRowViewModel, EmbedTableViewModel, Guidance, StatusBadge,
};

/// One row per index in `embed_range(from, to, format)`. Per-row failures are
/// kept in the table rather than aborting it.
pub fn present_embed_table(
    form: &WebNewform,
    embedding: usize,
    format: EmbedFormat,
    from: u64,
    to: u64,
    prec: usize,
) -> CommandResultViewModel<EmbedTableViewModel> {
    let rows: Vec<EmbedRowViewModel> = form
        .embed_range(from, to, format)
        .map(|n| {
            let value = if format.is_prime_indexed() {
                form.satake(embedding, n, prec, format)
            } else {
                form.embedding(embedding, Some(n as usize), prec, format)
            };
            match value {
                Ok(value) => EmbedRowViewModel {
                    n,
                    value: Some(value),
                    error: None,
                },
                Err(e) => EmbedRowViewModel {
                    n,
                    value: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    let root = form
        .embedding(embedding, None, prec, EmbedFormat::Embed)
        .ok();
    let failures = rows.iter().filter(|r| r.error.is_some()).count();
    let total = rows.len();

    let content = EmbedTableViewModel {
        label: form.label().to_string(),
        embedding,
        kind: format.to_string(),
        prec,
        root,
        rows,
    };

    let mut result = CommandResultViewModel::new(content);
    if total > 0 && failures == total {
        result = result
            .with_badge(StatusBadge::warning("No values could be computed"))
            .with_suggestion(
                Guidance::new("Check the stored coefficients").with_command(cmd::show(form.label())),
            );
    } else if failures > 0 {
        result = result.with_badge(StatusBadge::info(format!(
            "{} of {} values unavailable",
            failures, total
        )));
    }
    result
}
