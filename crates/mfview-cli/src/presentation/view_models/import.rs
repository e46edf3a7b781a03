use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ImportResultViewModel {
    pub path: String,
    pub db_path: String,
    pub newspaces: usize,
    pub newforms: usize,
    pub hecke_nf: usize,
}

impl CreateView for ImportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::import::ImportResultView;
        Box::new(ImportResultView::new(self))
    }
}
