use mfview_algebra::{Polynomial, PowerSeries};
use mfview_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::links::FieldKnowl;
use crate::newform::WebNewform;
use crate::qexp::{eigs_as_seqseq_to_qexp, split_on_pm};

/// Shown when a field needed for a display helper is missing from the row
pub const NOT_AVAILABLE: &str = "not available";

/// Shown when the coefficient field has no label
pub const NOT_IN_LMFDB: &str = "Not in LMFDB";

const RATIONALS: &str = "1.1.1.1";

/// Layout of the q-expansion; only `All` changes what is printed (no truncation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QexpFormat {
    #[default]
    Oneline,
    Short,
    All,
}

impl fmt::Display for QexpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QexpFormat::Oneline => "oneline",
            QexpFormat::Short => "short",
            QexpFormat::All => "all",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QexpFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "oneline" => Ok(QexpFormat::Oneline),
            "short" => Ok(QexpFormat::Short),
            "all" => Ok(QexpFormat::All),
            other => Err(format!("unknown q-expansion format: {}", other)),
        }
    }
}

impl WebNewform {
    /// The coefficient field, as a knowl when it has a label
    pub fn field_display<K: FieldKnowl + ?Sized>(&self, knowls: &K) -> String {
        match self.row.nf_label.as_deref() {
            None => r"\(\Q(\nu)\)".to_string(),
            Some(RATIONALS) => knowls.display_knowl(RATIONALS, r"\(\Q\)"),
            Some(_) => format!(r"\(\Q(\nu)\) = {}", self.field_knowl(knowls)),
        }
    }

    pub fn field_knowl<K: FieldKnowl + ?Sized>(&self, knowls: &K) -> String {
        match self.row.nf_label.as_deref() {
            Some(label) if !label.is_empty() => knowls.display_knowl(label, &knowls.pretty(label)),
            _ => NOT_IN_LMFDB.to_string(),
        }
    }

    /// Knowl for the imaginary quadratic CM field `2.0.|D|.1`
    pub fn cm_field_knowl<K: FieldKnowl + ?Sized>(&self, knowls: &K) -> Result<String> {
        if self.row.cm_disc == 0 {
            return Err(Error::NotCm(self.row.label.clone()));
        }
        let cm_label = format!("2.0.{}.1", -self.row.cm_disc);
        Ok(knowls.display_knowl(&cm_label, &knowls.pretty(&cm_label)))
    }

    /// `\( x^{2} - x - 1 \)`, or `None` without a stored polynomial
    pub fn defining_polynomial(&self) -> Option<String> {
        let poly = self.row.field_poly.as_ref().filter(|p| !p.is_empty())?;
        Some(format!(r"\( {} \)", Polynomial::from_coeffs(poly).latex(&["x"])))
    }

    /// The Hecke ring basis `\(\beta_{0} = 1\), \(\beta_{1} = \nu\), ...` in terms of
    /// a root `nu` of the defining polynomial
    pub fn order_basis(&self) -> String {
        let (Some(numerators), Some(denominators)) = (
            self.row.hecke_ring_numerators.as_ref(),
            self.row.hecke_ring_denominators.as_ref(),
        ) else {
            return NOT_AVAILABLE.to_string();
        };
        if numerators.is_empty() || numerators.len() != denominators.len() {
            return NOT_AVAILABLE.to_string();
        }

        numerators
            .iter()
            .zip(denominators)
            .enumerate()
            .map(|(i, (num, &den))| {
                let num = Polynomial::from_coeffs(num).latex(&["nu"]);
                let x = if den == 1 {
                    num
                } else {
                    format!(r"\frac{{{}}}{{{}}}", num, den)
                };
                format!(r"\(\beta_{{{}}} = {}\)", i, x)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The q-expansion to `O(q^prec)`, `prec = min(qexp_prec, prec_max)` unless
    /// `format` is `All`.
    ///
    /// Without exact coefficients only the leading `q + O(q^{2})` is known.
    pub fn q_expansion(&self, format: QexpFormat, prec_max: usize) -> String {
        if !self.has_exact_qexp {
            return PowerSeries::from_coeffs(&[0, 1], 2).latex("q", &[]);
        }

        let prec = match format {
            QexpFormat::All => self.qexp_prec,
            QexpFormat::Oneline | QexpFormat::Short => self.qexp_prec.min(prec_max),
        };

        if self.row.dim == 1 {
            let coeffs: Vec<i64> = self.qexp[..=prec]
                .iter()
                .map(|an| an.first().copied().unwrap_or(0))
                .collect();
            split_on_pm(&PowerSeries::from_coeffs(&coeffs, prec).latex("q", &[]))
        } else {
            eigs_as_seqseq_to_qexp(&self.qexp[..prec])
        }
    }

    /// Conrey label of the character that embedding `m` restricts to
    pub fn conrey_from_embedding(&self, m: usize) -> Option<u32> {
        let cyc_degree = self.characters.cyc_degree.max(1) as usize;
        let index = m.checked_sub(1)? / cyc_degree;
        self.characters.conrey_labels.get(index).copied()
    }
}
