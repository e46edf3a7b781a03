use mfview_types::{Part, Space};
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{NewformViewModel, QexpViewModel, ViewMode};

// --------------------------------------------------------
// Newform Page View
// --------------------------------------------------------

pub struct NewformView<'a> {
    data: &'a NewformViewModel,
    mode: ViewMode,
}

impl<'a> NewformView<'a> {
    pub fn new(data: &'a NewformViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_properties(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .data
            .properties
            .iter()
            .map(|p| p.name.len())
            .max()
            .unwrap_or(0);
        for property in &self.data.properties {
            writeln!(f, "  {:<width$}  {}", property.name, property.value, width = width)?;
        }
        Ok(())
    }

    fn render_dim_grid(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "Dimensions:".bold())?;
        writeln!(f, "  {:<3}{:>6}{:>6}{:>6}", "", "all", "new", "old")?;
        for space in Space::ALL {
            let row = self.data.dim_grid[space];
            writeln!(
                f,
                "  {:<3}{:>6}{:>6}{:>6}",
                format!("{:?}", space),
                row[Part::All],
                row[Part::New],
                row[Part::Old]
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Character link: {}", self.data.char_conrey_link)?;
        if !self.data.inner_twist.is_empty() {
            writeln!(f, "Inner twists:")?;
            for twist in &self.data.inner_twist {
                writeln!(f, "  {:<6} {}", twist.index, twist.link)?;
            }
        }
        if let Some(cm_field) = &self.data.cm_field {
            writeln!(f, "CM field: {}", cm_field)?;
        }
        writeln!(f, "Hecke ring basis: {}", self.data.order_basis)?;
        writeln!(
            f,
            "Stored coefficients: {} ({})",
            self.data.qexp_prec,
            if self.data.has_exact_qexp {
                "exact"
            } else {
                "traces only"
            }
        )?;
        Ok(())
    }
}

impl<'a> fmt::Display for NewformView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.label);
        }

        writeln!(f, "{}", self.data.title.bold())?;
        writeln!(f)?;
        self.render_properties(f)?;
        writeln!(f)?;
        writeln!(f, "Character orbit: {}", self.data.char_orbit_label)?;
        writeln!(f, "Coefficient field: {}", self.data.field)?;
        if let Some(poly) = &self.data.defining_polynomial {
            writeln!(f, "Defining polynomial: {}", poly)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "q-expansion:".bold())?;
        writeln!(f, "  {}", self.data.qexp)?;
        writeln!(f)?;
        self.render_dim_grid(f)?;

        if self.mode == ViewMode::Verbose {
            self.render_verbose(f)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// q-expansion View
// --------------------------------------------------------

pub struct QexpView<'a> {
    data: &'a QexpViewModel,
}

impl<'a> QexpView<'a> {
    pub fn new(data: &'a QexpViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for QexpView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.qexp)
    }
}
