//! Complex embeddings of the coefficients and Satake parameters.
//!
//! Embeddings are numbered from 1 in the order of the complex roots of the
//! defining polynomial, sorted by real part and then imaginary part. Embedding
//! `m` sends `nu` to the `m`-th root; the Hecke ring basis `beta_i = num_i(nu) / den_i`
//! then gives every `a_n` as a complex number.

use mfview_algebra::{
    Complex64, Polynomial, PrimeRange, complex_roots, conrey_character_value, format_complex,
    format_real, is_prime, prime_range,
};
use mfview_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::debug;

use crate::newform::WebNewform;

/// Which numeric table an index range is for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedFormat {
    /// `a_n` under the embedding
    #[default]
    Embed,
    /// `a_n / n^((k-1)/2)`
    AnalyticEmbed,
    /// Satake parameter `alpha_p`
    Satake,
    /// `arg(alpha_p)` in radians
    SatakeAngle,
}

impl EmbedFormat {
    /// Satake formats are indexed by primes only
    pub fn is_prime_indexed(self) -> bool {
        matches!(self, EmbedFormat::Satake | EmbedFormat::SatakeAngle)
    }
}

impl fmt::Display for EmbedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmbedFormat::Embed => "embed",
            EmbedFormat::AnalyticEmbed => "analytic_embed",
            EmbedFormat::Satake => "satake",
            EmbedFormat::SatakeAngle => "satake_angle",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EmbedFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "embed" => Ok(EmbedFormat::Embed),
            "analytic_embed" => Ok(EmbedFormat::AnalyticEmbed),
            "satake" => Ok(EmbedFormat::Satake),
            "satake_angle" => Ok(EmbedFormat::SatakeAngle),
            other => Err(format!("unknown embedding format: {}", other)),
        }
    }
}

/// Lazy index sequence returned by [`WebNewform::embed_range`]
#[derive(Debug, Clone)]
pub enum EmbedRange {
    Integers(Range<u64>),
    Primes(PrimeRange),
}

impl Iterator for EmbedRange {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            EmbedRange::Integers(range) => range.next(),
            EmbedRange::Primes(primes) => primes.next(),
        }
    }
}

/// `|a_p|^2` below this counts as `a_p = 0`
const ZERO_TOLERANCE: f64 = 1e-12;
/// Summed distance from `chi(p)` below which a character fits an embedding
const FIT_TOLERANCE: f64 = 1e-6;

fn unavailable(msg: impl Into<String>) -> Error {
    Error::Unavailable(msg.into())
}

impl WebNewform {
    /// Indices `n` in `[a, b)` for a table in `format`: all integers, or only primes for Satake data
    pub fn embed_range(&self, a: u64, b: u64, format: EmbedFormat) -> EmbedRange {
        if format.is_prime_indexed() {
            EmbedRange::Primes(prime_range(a, b))
        } else {
            EmbedRange::Integers(a..b.max(a))
        }
    }

    /// Complex roots of the defining polynomial in embedding order
    fn embedding_roots(&self) -> Result<Vec<Complex64>> {
        match self.row.field_poly.as_deref() {
            Some(poly) if poly.len() > 1 => {
                let coeffs: Vec<f64> = poly.iter().map(|&c| c as f64).collect();
                complex_roots(&coeffs).map_err(|e| unavailable(e.to_string()))
            }
            _ if self.row.dim == 1 => Ok(vec![Complex64::new(0.0, 0.0)]),
            _ => Err(unavailable(format!(
                "no defining polynomial for {}",
                self.row.label
            ))),
        }
    }

    /// Values of `beta_0, beta_1, ...` at `nu`
    fn basis_values(&self, nu: Complex64, len: usize) -> Vec<Complex64> {
        let ring = match (
            self.row.hecke_ring_numerators.as_ref(),
            self.row.hecke_ring_denominators.as_ref(),
        ) {
            (Some(nums), Some(dens)) if nums.len() >= len && dens.len() >= len => {
                Some((nums, dens))
            }
            _ => None,
        };

        (0..len)
            .map(|i| match ring {
                Some((nums, dens)) if dens[i] != 0 => {
                    Polynomial::from_coeffs(&nums[i]).eval(&[nu]) / dens[i] as f64
                }
                _ => nu.powu(i as u32),
            })
            .collect()
    }

    /// Numeric value of embedding `m` at `a_n`, or of the root itself when `n` is `None`
    pub fn embedding_value(&self, m: usize, n: Option<usize>, analytic: bool) -> Result<Complex64> {
        let roots = self.embedding_roots()?;
        let nu = m
            .checked_sub(1)
            .and_then(|i| roots.get(i))
            .copied()
            .ok_or_else(|| {
                unavailable(format!(
                    "embedding {} of {} (there are {})",
                    m,
                    self.row.label,
                    roots.len()
                ))
            })?;

        let Some(n) = n else {
            return Ok(nu);
        };

        if !self.has_exact_qexp {
            return Err(unavailable(format!(
                "exact coefficients of {}",
                self.row.label
            )));
        }
        let an = self
            .qexp
            .get(n)
            .filter(|_| n > 0)
            .ok_or_else(|| unavailable(format!("a_{} of {}", n, self.row.label)))?;

        let value: Complex64 = self
            .basis_values(nu, an.len())
            .into_iter()
            .zip(an)
            .map(|(beta, &c)| beta * c as f64)
            .sum();

        if analytic {
            Ok(value / (n as f64).powf((f64::from(self.row.weight) - 1.0) / 2.0))
        } else {
            Ok(value)
        }
    }

    /// Embedding `m` of `a_n` (or of `nu`) with `prec` decimals
    pub fn embedding(
        &self,
        m: usize,
        n: Option<usize>,
        prec: usize,
        format: EmbedFormat,
    ) -> Result<String> {
        let analytic = match format {
            EmbedFormat::Embed => false,
            EmbedFormat::AnalyticEmbed => true,
            other => return Err(unavailable(format!("{} is not an embedding format", other))),
        };
        let value = self.embedding_value(m, n, analytic)?;
        debug!(label = %self.row.label, m, ?n, %format, "computed embedding");
        Ok(format_complex(value, prec))
    }

    /// Conrey label of the Galois conjugate character that embedding `m` belongs to.
    ///
    /// For `p` prime to the level, `a_p = chi(p) * conj(a_p)`, so under the embedding
    /// `a_p^2 / |a_p|^2 = chi(p)`. The label is the unique one whose values fit every
    /// nonzero `a_p` of the exact q-expansion.
    fn character_of_embedding(&self, m: usize) -> Result<u32> {
        let labels = &self.characters.conrey_labels;
        if let [only] = labels.as_slice() {
            return Ok(*only);
        }
        let level = u64::from(self.row.level);

        let mut misfit = vec![0.0f64; labels.len()];
        let mut witnesses = 0usize;
        for p in prime_range(2, self.qexp.len() as u64) {
            if level % p == 0 {
                continue;
            }
            let a = self.embedding_value(m, Some(p as usize), false)?;
            let norm = a.norm_sqr();
            if norm < ZERO_TOLERANCE {
                continue;
            }
            witnesses += 1;
            for (score, &c) in misfit.iter_mut().zip(labels) {
                let chi = conrey_character_value(level, u64::from(c), p)
                    .map_err(|e| unavailable(e.to_string()))?
                    .to_complex();
                *score += (a * a / norm - chi).norm();
            }
        }

        let fitting: Vec<u32> = labels
            .iter()
            .zip(&misfit)
            .filter(|(_, score)| **score < FIT_TOLERANCE)
            .map(|(&c, _)| c)
            .collect();
        match fitting.as_slice() {
            [c] if witnesses > 0 => {
                debug!(
                    label = %self.row.label,
                    m,
                    conrey = *c,
                    witnesses,
                    "matched embedding character"
                );
                Ok(*c)
            }
            _ => Err(unavailable(format!(
                "character of embedding {} of {} ({} of {} labels fit {} nonzero a_p)",
                m,
                self.row.label,
                fitting.len(),
                labels.len(),
                witnesses
            ))),
        }
    }

    /// Satake parameter `alpha_p` for embedding `m`.
    ///
    /// `alpha_p` and its partner are the roots of `X^2 - a X + chi(p)` with
    /// `a = a_p / p^((k-1)/2)`; the one with the smaller argument in `(-pi, pi]` is returned.
    pub fn satake_parameter(&self, m: usize, p: u64) -> Result<Complex64> {
        if !is_prime(p) {
            return Err(unavailable(format!("{} is not prime", p)));
        }
        if u64::from(self.row.level) % p == 0 {
            return Err(unavailable(format!(
                "p = {} divides the level {}",
                p, self.row.level
            )));
        }

        let a = self.embedding_value(m, Some(p as usize), true)?;

        let conrey = self.character_of_embedding(m)?;
        let chi = conrey_character_value(u64::from(self.row.level), u64::from(conrey), p)
            .map_err(|e| unavailable(e.to_string()))?
            .to_complex();

        let root = (a * a - chi * 4.0).sqrt();
        let alpha = (a + root) / 2.0;
        let beta = (a - root) / 2.0;

        Ok(if principal_arg(beta) < principal_arg(alpha) {
            beta
        } else {
            alpha
        })
    }

    /// `alpha_p` as a complex number, or its argument, with `prec` decimals
    pub fn satake(&self, m: usize, p: u64, prec: usize, format: EmbedFormat) -> Result<String> {
        let alpha = self.satake_parameter(m, p)?;
        match format {
            EmbedFormat::Satake => Ok(format_complex(alpha, prec)),
            EmbedFormat::SatakeAngle => Ok(format_real(principal_arg(alpha), prec)),
            other => Err(unavailable(format!("{} is not a Satake format", other))),
        }
    }
}

/// Argument in `(-pi, pi]`
fn principal_arg(z: Complex64) -> f64 {
    let theta = z.arg();
    if theta <= -PI { theta + 2.0 * PI } else { theta }
}
