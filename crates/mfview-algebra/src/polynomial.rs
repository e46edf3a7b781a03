use num_bigint::BigInt;
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, Neg};

use crate::latex::{join_terms, latex_term, latex_variable_name};

/// Exponent vector with trailing zeros trimmed, so `x0` and `x0 * x1^0` compare equal.
type Monomial = Vec<u32>;

fn trimmed(mut exponents: Monomial) -> Monomial {
    while exponents.last() == Some(&0) {
        exponents.pop();
    }
    exponents
}

fn total_degree(m: &[u32]) -> u64 {
    m.iter().map(|&e| u64::from(e)).sum()
}

/// Degree reverse lexicographic order
fn degrevlex(a: &[u32], b: &[u32]) -> Ordering {
    total_degree(a).cmp(&total_degree(b)).then_with(|| {
        let len = a.len().max(b.len());
        for i in (0..len).rev() {
            let ea = a.get(i).copied().unwrap_or(0);
            let eb = b.get(i).copied().unwrap_or(0);
            if ea != eb {
                return eb.cmp(&ea);
            }
        }
        Ordering::Equal
    })
}

/// Sparse polynomial over Q in variables `x_0, x_1, ...`.
///
/// Variables are positional; names are only supplied when rendering. This keeps
/// sums of polynomials built from different generator counts well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, BigRational>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(value: BigRational) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Vec::new(), value);
        poly
    }

    pub fn from_int(value: i64) -> Self {
        Self::constant(BigRational::from_integer(BigInt::from(value)))
    }

    /// The generator `x_index`
    pub fn generator(index: usize) -> Self {
        let mut exponents = vec![0; index + 1];
        exponents[index] = 1;
        let mut poly = Self::zero();
        poly.add_term(exponents, BigRational::from_integer(BigInt::from(1)));
        poly
    }

    /// Univariate polynomial in `x_0` from integer coefficients, constant term first
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        let mut poly = Self::zero();
        for (degree, &c) in coeffs.iter().enumerate() {
            let exponents = if degree == 0 {
                Vec::new()
            } else {
                vec![degree as u32]
            };
            poly.add_term(exponents, BigRational::from_integer(BigInt::from(c)));
        }
        poly
    }

    /// `sum_i coeffs[i] * gens[i]` where `gens = [1, x_0, x_1, ...]`
    pub fn linear_combination(coeffs: &[i64]) -> Self {
        coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let basis = if i == 0 {
                    Self::from_int(1)
                } else {
                    Self::generator(i - 1)
                };
                basis.scale(&BigRational::from_integer(BigInt::from(c)))
            })
            .sum()
    }

    fn add_term(&mut self, exponents: Monomial, coeff: BigRational) {
        if coeff.is_zero() {
            return;
        }
        let key = trimmed(exponents);
        let entry = self.terms.entry(key.clone()).or_insert_with(BigRational::zero);
        *entry += coeff;
        if entry.is_zero() {
            self.terms.remove(&key);
        }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total degree; `None` for the zero polynomial
    pub fn degree(&self) -> Option<u64> {
        self.terms.keys().map(|m| total_degree(m)).max()
    }

    pub fn scale(&self, factor: &BigRational) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c * factor))
                .collect(),
        }
    }

    /// Terms in descending degrevlex order
    fn sorted_terms(&self) -> Vec<(&Monomial, &BigRational)> {
        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|(a, _), (b, _)| degrevlex(b, a));
        terms
    }

    /// LaTeX with positional variable names, e.g. `&["beta1", "beta2"]`.
    ///
    /// Variables beyond `names` fall back to `x_{i}`.
    pub fn latex(&self, names: &[&str]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let rendered = self.sorted_terms().into_iter().map(|(monomial, coeff)| {
            let body = monomial
                .iter()
                .enumerate()
                .filter(|(_, e)| **e > 0)
                .map(|(i, &e)| {
                    let name = names
                        .get(i)
                        .map(|n| latex_variable_name(n))
                        .unwrap_or_else(|| format!("x_{{{}}}", i));
                    if e == 1 {
                        name
                    } else {
                        format!("{}^{{{}}}", name, e)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            latex_term(coeff, &body)
        });

        join_terms(rendered)
    }

    /// Evaluate at a complex point; missing coordinates are treated as zero.
    pub fn eval(&self, point: &[Complex64]) -> Complex64 {
        self.terms
            .iter()
            .map(|(monomial, coeff)| {
                monomial.iter().enumerate().fold(
                    Complex64::new(rational_to_f64(coeff), 0.0),
                    |acc, (i, &e)| {
                        let x = point.get(i).copied().unwrap_or_default();
                        acc * x.powu(e)
                    },
                )
            })
            .sum()
    }
}

/// Lossy conversion used only for numeric evaluation
pub fn rational_to_f64(value: &BigRational) -> f64 {
    let numer = value.numer().to_f64().unwrap_or(f64::NAN);
    let denom = value.denom().to_f64().unwrap_or(f64::NAN);
    numer / denom
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, other: Polynomial) -> Polynomial {
        for (m, c) in other.terms {
            self.add_term(m, c);
        }
        self
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'a Polynomial) -> Polynomial {
        self.clone() + other.clone()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), Add::add)
    }
}
