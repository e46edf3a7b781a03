use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct EmbedTableViewModel {
    pub label: String,
    pub embedding: usize,
    pub kind: String,
    pub prec: usize,
    /// Image of the field generator under this embedding
    pub root: Option<String>,
    pub rows: Vec<EmbedRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct EmbedRowViewModel {
    pub n: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateView for EmbedTableViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::embed::EmbedTableView;
        Box::new(EmbedTableView::new(self, mode))
    }
}
