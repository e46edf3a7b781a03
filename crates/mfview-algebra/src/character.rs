//! Values of Dirichlet characters in Conrey's numbering.
//!
//! `chi_q(n, m)` for odd prime powers uses the least primitive root `g` that
//! generates `(Z/p^e)^*`: `chi(m) = e(log_g(n) log_g(m) / phi(p^e))`. For
//! `2^e` the group is `<-1> x <5>` and both components contribute.

use num_complex::Complex64;
use num_rational::Ratio;
use std::f64::consts::PI;

use crate::primes::factor;
use crate::{Error, Result};

/// A character value: zero, or `exp(2 pi i * angle)` with `angle` in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterValue {
    Zero,
    RootOfUnity(Ratio<u64>),
}

impl CharacterValue {
    pub fn to_complex(&self) -> Complex64 {
        match self {
            CharacterValue::Zero => Complex64::new(0.0, 0.0),
            CharacterValue::RootOfUnity(angle) => match (*angle.numer(), *angle.denom()) {
                (0, _) => Complex64::new(1.0, 0.0),
                (1, 2) => Complex64::new(-1.0, 0.0),
                (1, 4) => Complex64::new(0.0, 1.0),
                (3, 4) => Complex64::new(0.0, -1.0),
                (n, d) => Complex64::from_polar(1.0, 2.0 * PI * n as f64 / d as f64),
            },
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = u128::from(modulus);
    let mut result = 1u128 % m;
    let mut b = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    result as u64
}

/// Least primitive root mod `p` for `e == 1`, least primitive root mod `p^2` (hence all `p^e`) otherwise
fn primitive_root(p: u64, e: u32) -> u64 {
    let order = p - 1;
    let prime_divisors: Vec<u64> = factor(order).into_iter().map(|(r, _)| r).collect();
    let generates_mod_p = |g: u64| {
        g % p != 0 && prime_divisors.iter().all(|&r| pow_mod(g, order / r, p) != 1)
    };
    let generates_mod_p2 = |g: u64| e == 1 || pow_mod(g, order, p * p) != 1;

    (2..p * p)
        .find(|&g| generates_mod_p(g) && generates_mod_p2(g))
        .unwrap_or(1)
}

fn discrete_log(g: u64, x: u64, modulus: u64, order: u64) -> Option<u64> {
    let target = x % modulus;
    let mut acc = 1 % modulus;
    for k in 0..order {
        if acc == target {
            return Some(k);
        }
        acc = ((u128::from(acc) * u128::from(g)) % u128::from(modulus)) as u64;
    }
    None
}

/// `chi_modulus(label, m)` for the Conrey character with the given label
pub fn conrey_character_value(modulus: u64, label: u64, m: u64) -> Result<CharacterValue> {
    if modulus == 0 || gcd(label, modulus) != 1 {
        return Err(Error::NotCoprime {
            modulus,
            value: label,
        });
    }
    if gcd(m, modulus) != 1 {
        return Ok(CharacterValue::Zero);
    }

    let mut angle = Ratio::new(0u64, 1);
    for (p, e) in factor(modulus) {
        let pe = p.pow(e);
        if p == 2 {
            if e < 2 {
                continue;
            }
            let sign = |x: u64| u64::from(x % 4 == 3);
            let unsigned = |x: u64| if x % 4 == 3 { pe - x % pe } else { x % pe };
            let order = pe / 4;
            let a = discrete_log(5, unsigned(label), pe, order).unwrap_or(0);
            let b = discrete_log(5, unsigned(m), pe, order).unwrap_or(0);
            angle += Ratio::new(sign(label) * sign(m), 2);
            angle += Ratio::new(a * b % order, order);
        } else {
            let phi = pe / p * (p - 1);
            let g = primitive_root(p, e);
            let a = discrete_log(g, label, pe, phi).unwrap_or(0);
            let b = discrete_log(g, m, pe, phi).unwrap_or(0);
            angle += Ratio::new(
                ((u128::from(a) * u128::from(b)) % u128::from(phi)) as u64,
                phi,
            );
        }
        angle = angle.fract();
    }

    Ok(CharacterValue::RootOfUnity(angle))
}
