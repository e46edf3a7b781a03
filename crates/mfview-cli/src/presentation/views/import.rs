use std::fmt;

use crate::presentation::view_models::ImportResultViewModel;

pub struct ImportResultView<'a> {
    data: &'a ImportResultViewModel,
}

impl<'a> ImportResultView<'a> {
    pub fn new(data: &'a ImportResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ImportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source:   {}", self.data.path)?;
        writeln!(f, "Database: {}", self.data.db_path)?;
        writeln!(
            f,
            "{} newspace(s), {} newform(s), {} eigenvalue row(s)",
            self.data.newspaces, self.data.newforms, self.data.hecke_nf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_summary_text() {
        let data = ImportResultViewModel {
            path: "bundle.json".to_string(),
            db_path: "/data/mfview.db".to_string(),
            newspaces: 5,
            newforms: 5,
            hecke_nf: 36,
        };
        assert_eq!(
            ImportResultView::new(&data).to_string(),
            "Source:   bundle.json\nDatabase: /data/mfview.db\n5 newspace(s), 5 newform(s), 36 eigenvalue row(s)\n"
        );
    }
}
