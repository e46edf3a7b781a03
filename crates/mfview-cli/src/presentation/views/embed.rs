use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{EmbedTableViewModel, ViewMode};

pub struct EmbedTableView<'a> {
    data: &'a EmbedTableViewModel,
    mode: ViewMode,
}

impl<'a> EmbedTableView<'a> {
    pub fn new(data: &'a EmbedTableViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for EmbedTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode != ViewMode::Minimal {
            writeln!(
                f,
                "{} embedding {} ({})",
                self.data.label.bold(),
                self.data.embedding,
                self.data.kind
            )?;
            if let Some(root) = &self.data.root {
                writeln!(f, "nu = {}", root)?;
            }
            writeln!(f)?;
        }

        for row in &self.data.rows {
            match (&row.value, &row.error) {
                (Some(value), _) => writeln!(f, "{:>6}  {}", row.n, value)?,
                (None, Some(error)) => writeln!(f, "{:>6}  {}", row.n, error.dimmed())?,
                (None, None) => writeln!(f, "{:>6}", row.n)?,
            }
        }
        Ok(())
    }
}
