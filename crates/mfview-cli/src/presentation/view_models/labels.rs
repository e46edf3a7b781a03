use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct LabelListViewModel {
    pub level: Option<u32>,
    pub labels: Vec<String>,
    /// Newforms in the store, ignoring the level filter
    pub total: usize,
}

impl CreateView for LabelListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::labels::LabelListView;
        Box::new(LabelListView::new(self, mode))
    }
}
