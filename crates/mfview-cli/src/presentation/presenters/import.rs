use mfview_index::ImportSummary;
use std::path::Path;

use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ImportResultViewModel, StatusBadge,
};

pub fn present_import_result(
    path: &Path,
    db_path: &Path,
    summary: ImportSummary,
) -> CommandResultViewModel<ImportResultViewModel> {
    let content = ImportResultViewModel {
        path: path.display().to_string(),
        db_path: db_path.display().to_string(),
        newspaces: summary.newspaces,
        newforms: summary.newforms,
        hecke_nf: summary.hecke_nf,
    };

    let result = CommandResultViewModel::new(content);

    if summary.newforms == 0 {
        return result
            .with_badge(StatusBadge::info("Bundle contained no newforms"))
            .with_suggestion(Guidance::new("Import a bundle with a \"newforms\" array").with_command(cmd::IMPORT));
    }

    result
        .with_badge(StatusBadge::success(format!(
            "Imported {} newform(s)",
            summary.newforms
        )))
        .with_suggestion(Guidance::new("List stored labels").with_command(cmd::LABELS))
}
