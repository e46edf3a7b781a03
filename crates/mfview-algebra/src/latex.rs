use num_rational::BigRational;
use num_traits::{One, Signed};

const GREEK: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega",
];

/// LaTeX for a variable name: `beta1 -> \beta_{1}`, `nu -> \nu`, `x -> x`.
///
/// A trailing run of digits becomes a subscript; Greek letter names get a backslash.
pub fn latex_variable_name(name: &str) -> String {
    let split = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map_or(name.len(), |(i, _)| i);
    let (base, digits) = name.split_at(split);

    let base = if GREEK.contains(&base) {
        format!("\\{}", base)
    } else {
        base.to_string()
    };

    if digits.is_empty() || base.is_empty() {
        format!("{}{}", base, digits)
    } else {
        format!("{}_{{{}}}", base, digits)
    }
}

/// `3`, `-3`, `\frac{1}{2}`, `-\frac{1}{2}`
pub fn latex_rational(value: &BigRational) -> String {
    if value.is_integer() {
        return value.numer().to_string();
    }

    let sign = if value.is_negative() { "-" } else { "" };
    format!(
        "{}\\frac{{{}}}{{{}}}",
        sign,
        value.numer().abs(),
        value.denom()
    )
}

/// Render `coeff * body` where `body` is a monomial string (empty for the constant term).
pub(crate) fn latex_term(coeff: &BigRational, body: &str) -> String {
    if body.is_empty() {
        return latex_rational(coeff);
    }
    if coeff.is_one() {
        return body.to_string();
    }
    if (-coeff).is_one() {
        return format!("-{}", body);
    }
    format!("{} {}", latex_rational(coeff), body)
}

/// Join rendered terms with ` + `, folding a leading minus into ` - `.
pub(crate) fn join_terms<I>(terms: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for term in terms {
        if out.is_empty() {
            out = term;
        } else if let Some(rest) = term.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(rest);
        } else {
            out.push_str(" + ");
            out.push_str(&term);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_variable_names() {
        assert_eq!(latex_variable_name("beta1"), "\\beta_{1}");
        assert_eq!(latex_variable_name("beta12"), "\\beta_{12}");
        assert_eq!(latex_variable_name("nu"), "\\nu");
        assert_eq!(latex_variable_name("x"), "x");
        assert_eq!(latex_variable_name("a2"), "a_{2}");
        assert_eq!(latex_variable_name("42"), "42");
    }

    #[test]
    fn test_rationals() {
        assert_eq!(latex_rational(&q(3, 1)), "3");
        assert_eq!(latex_rational(&q(-3, 1)), "-3");
        assert_eq!(latex_rational(&q(1, 2)), "\\frac{1}{2}");
        assert_eq!(latex_rational(&q(-2, 6)), "-\\frac{1}{3}");
    }

    #[test]
    fn test_terms_and_join() {
        assert_eq!(latex_term(&q(1, 1), "x"), "x");
        assert_eq!(latex_term(&q(-1, 1), "x"), "-x");
        assert_eq!(latex_term(&q(-1, 1), ""), "-1");
        assert_eq!(latex_term(&q(5, 1), "x^{2}"), "5 x^{2}");

        let joined = join_terms(vec!["x^{2}".to_string(), "-x".to_string(), "-1".to_string()]);
        assert_eq!(joined, "x^{2} - x - 1");
    }
}
