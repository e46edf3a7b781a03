use num_complex::Complex64;
use std::f64::consts::PI;

use crate::{Error, Result};

const MAX_ITERATIONS: usize = 2000;
const STEP_TOLERANCE: f64 = 1e-15;
const RESIDUAL_TOLERANCE: f64 = 1e-7;
/// Real parts closer than this are treated as equal when ordering roots
const ORDER_GRID: f64 = 1e-9;

fn horner(coeffs: &[f64], z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// All complex roots of `sum_i coeffs[i] x^i`, ordered by real part, then imaginary part.
///
/// Uses simultaneous Weierstrass (Durand-Kerner) iteration on the monic
/// polynomial. Roots whose imaginary part is negligible are returned as reals.
pub fn complex_roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    let Some(degree) = coeffs.iter().rposition(|c| *c != 0.0) else {
        return Err(Error::ZeroPolynomial);
    };
    if degree == 0 {
        return Ok(Vec::new());
    }

    let lead = coeffs[degree];
    let monic: Vec<f64> = coeffs[..=degree].iter().map(|c| c / lead).collect();

    // Cauchy bound on the root moduli
    let radius = 1.0 + monic[..degree].iter().fold(0.0f64, |m, c| m.max(c.abs()));
    let mut roots: Vec<Complex64> = (0..degree)
        .map(|k| Complex64::from_polar(radius, 2.0 * PI * k as f64 / degree as f64 + 0.4))
        .collect();

    for _ in 0..MAX_ITERATIONS {
        let mut max_step = 0.0f64;
        for k in 0..degree {
            let zk = roots[k];
            let denom = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != k)
                .fold(Complex64::new(1.0, 0.0), |acc, (_, zj)| acc * (zk - zj));
            if denom.norm() == 0.0 {
                roots[k] = zk + Complex64::new(STEP_TOLERANCE.sqrt(), STEP_TOLERANCE.sqrt());
                max_step = f64::INFINITY;
                continue;
            }
            let step = horner(&monic, zk) / denom;
            roots[k] = zk - step;
            max_step = max_step.max(step.norm() / (1.0 + zk.norm()));
        }
        if max_step < STEP_TOLERANCE {
            break;
        }
    }

    for z in &roots {
        let scale: f64 = monic
            .iter()
            .enumerate()
            .map(|(i, c)| c.abs() * z.norm().powi(i as i32))
            .sum();
        if !z.is_finite() || horner(&monic, *z).norm() > RESIDUAL_TOLERANCE * scale.max(1.0) {
            return Err(Error::NoConvergence { degree });
        }
    }

    for z in &mut roots {
        if z.im.abs() < 1e-10 * (1.0 + z.re.abs()) {
            z.im = 0.0;
        }
    }

    roots.sort_by(|a, b| {
        // `+ 0.0` folds -0.0 into 0.0 so conjugate pairs order by imaginary part
        let ka = (a.re / ORDER_GRID).round() + 0.0;
        let kb = (b.re / ORDER_GRID).round() + 0.0;
        ka.total_cmp(&kb).then(a.im.total_cmp(&b.im))
    });

    Ok(roots)
}

/// Fixed-point real with `prec` decimals; values that round to zero print without a sign.
pub fn format_real(value: f64, prec: usize) -> String {
    let s = format!("{:.*}", prec, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// `a`, `bi`, `a + bi` or `a - bi` with `prec` decimals
pub fn format_complex(value: Complex64, prec: usize) -> String {
    let re = format_real(value.re, prec);
    let im = format_real(value.im.abs(), prec);
    let im_is_zero = im.chars().all(|c| c == '0' || c == '.');
    let re_is_zero = re.chars().all(|c| c == '0' || c == '.');

    if im_is_zero {
        return re;
    }

    let sign_negative = value.im < 0.0;
    if re_is_zero {
        return if sign_negative {
            format!("-{}i", im)
        } else {
            format!("{}i", im)
        };
    }

    format!("{} {} {}i", re, if sign_negative { "-" } else { "+" }, im)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_ratio_roots() {
        let roots = complex_roots(&[-1.0, -1.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 2);
        assert!((roots[0].re - (1.0 - 5f64.sqrt()) / 2.0).abs() < 1e-12);
        assert!((roots[1].re - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-12);
        assert_eq!(roots[0].im, 0.0);
    }

    #[test]
    fn test_conjugate_pair_order() {
        // x^2 + 1
        let roots = complex_roots(&[1.0, 0.0, 1.0]).unwrap();
        assert!((roots[0] - Complex64::new(0.0, -1.0)).norm() < 1e-12);
        assert!((roots[1] - Complex64::new(0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_linear_and_constant() {
        let roots = complex_roots(&[0.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].norm() < 1e-14);

        assert!(complex_roots(&[3.0]).unwrap().is_empty());
        assert_eq!(complex_roots(&[0.0, 0.0]), Err(Error::ZeroPolynomial));
    }

    #[test]
    fn test_cyclotomic_roots_on_unit_circle() {
        // x^4 + x^3 + x^2 + x + 1
        let roots = complex_roots(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 4);
        for z in roots {
            assert!((z.norm() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_real(-0.0000001, 6), "0.000000");
        assert_eq!(format_real(1.5, 2), "1.50");
        assert_eq!(format_complex(Complex64::new(1.0, 0.0), 3), "1.000");
        assert_eq!(format_complex(Complex64::new(0.0, -2.0), 1), "-2.0i");
        assert_eq!(format_complex(Complex64::new(0.5, 0.25), 2), "0.50 + 0.25i");
        assert_eq!(format_complex(Complex64::new(-0.5, -0.25), 2), "-0.50 - 0.25i");
    }
}
