use crate::latex::{join_terms, latex_variable_name};
use crate::polynomial::Polynomial;

/// Power series `sum_n c_n q^n` with polynomial coefficients and an optional
/// precision (`None` = exact, no `O(..)` term).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerSeries {
    coeffs: Vec<Polynomial>,
    prec: Option<usize>,
}

impl PowerSeries {
    /// Coefficients at or beyond `prec` are dropped.
    pub fn new(mut coeffs: Vec<Polynomial>, prec: Option<usize>) -> Self {
        if let Some(prec) = prec {
            coeffs.truncate(prec);
        }
        Self { coeffs, prec }
    }

    /// Series over Q from integer coefficients, truncated to `O(q^prec)`
    pub fn from_coeffs(coeffs: &[i64], prec: usize) -> Self {
        Self::new(
            coeffs.iter().map(|&c| Polynomial::from_int(c)).collect(),
            Some(prec),
        )
    }

    /// Exact series `coeff * q^power`
    pub fn monomial(coeff: Polynomial, power: usize) -> Self {
        let mut coeffs = vec![Polynomial::zero(); power];
        coeffs.push(coeff);
        Self::new(coeffs, None)
    }

    /// LaTeX in the series variable `var`; `names` are the coefficient ring's generators.
    ///
    /// A coefficient of a positive power that is itself a sum is wrapped in
    /// `\left(..\right)`; unit coefficients are elided.
    pub fn latex(&self, var: &str, names: &[&str]) -> String {
        let var = latex_variable_name(var);

        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(n, c)| {
                let coeff = c.latex(names);
                if n == 0 {
                    return coeff;
                }

                let power = if n == 1 {
                    var.clone()
                } else {
                    format!("{}^{{{}}}", var, n)
                };

                let compound = coeff
                    .get(1..)
                    .is_some_and(|rest| rest.contains('+') || rest.contains('-'));
                match coeff.as_str() {
                    "1" => power,
                    "-1" => format!("-{}", power),
                    _ if compound => format!("\\left({}\\right) {}", coeff, power),
                    _ => format!("{} {}", coeff, power),
                }
            });

        let body = join_terms(terms);

        let Some(prec) = self.prec else {
            return if body.is_empty() { "0".to_string() } else { body };
        };

        let bigoh = match prec {
            0 => "O(1)".to_string(),
            1 => format!("O({})", var),
            _ => format!("O({}^{{{}}})", var, prec),
        };

        if body.is_empty() {
            bigoh
        } else {
            format!("{} + {}", body, bigoh)
        }
    }
}
