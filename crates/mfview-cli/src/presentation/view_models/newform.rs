use mfview_engine::{InnerTwist, PageLink, Property};
use mfview_types::DimGrid;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct NewformViewModel {
    pub label: String,
    pub title: String,
    pub level: u32,
    pub weight: u32,
    pub dim: u64,
    pub char_orbit_label: String,
    pub char_conrey: u32,
    pub char_conrey_str: String,
    pub char_conrey_link: String,
    pub inner_twist: Vec<InnerTwist>,
    pub is_cm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cm_field: Option<String>,
    pub field: String,
    pub defining_polynomial: Option<String>,
    pub order_basis: String,
    pub has_exact_qexp: bool,
    pub qexp_prec: usize,
    pub qexp: String,
    pub dim_grid: DimGrid,
    pub properties: Vec<Property>,
    pub bread: Vec<PageLink>,
    pub friends: Vec<PageLink>,
}

#[derive(Debug, Serialize)]
pub struct QexpViewModel {
    pub label: String,
    pub style: String,
    pub prec_max: usize,
    pub has_exact_qexp: bool,
    pub qexp: String,
}

impl CreateView for NewformViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::newform::NewformView;
        Box::new(NewformView::new(self, mode))
    }
}

impl CreateView for QexpViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::newform::QexpView;
        Box::new(QexpView::new(self))
    }
}
