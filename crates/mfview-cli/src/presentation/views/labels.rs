use std::fmt;

use crate::presentation::view_models::{LabelListViewModel, ViewMode};

pub struct LabelListView<'a> {
    data: &'a LabelListViewModel,
    mode: ViewMode,
}

impl<'a> LabelListView<'a> {
    pub fn new(data: &'a LabelListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for LabelListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for label in &self.data.labels {
            writeln!(f, "{}", label)?;
        }

        if self.mode != ViewMode::Minimal && !self.data.labels.is_empty() {
            writeln!(f)?;
            match self.data.level {
                Some(level) => writeln!(
                    f,
                    "{} shown at level {} ({} stored)",
                    self.data.labels.len(),
                    level,
                    self.data.total
                )?,
                None => writeln!(f, "{} of {} shown", self.data.labels.len(), self.data.total)?,
            }
        }
        Ok(())
    }
}
