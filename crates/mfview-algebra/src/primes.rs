/// Deterministic trial division; adequate for the index ranges shown on a page.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut d = 5u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Lazy iterator over the primes in `[start, end)`
#[derive(Debug, Clone)]
pub struct PrimeRange {
    next: u64,
    end: u64,
}

impl Iterator for PrimeRange {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.next < self.end {
            let candidate = self.next;
            self.next += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

pub fn prime_range(start: u64, end: u64) -> PrimeRange {
    PrimeRange { next: start, end }
}

/// Prime factorization as `(p, e)` pairs in increasing order of `p`
pub fn factor(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    let mut p = 2u64;
    while p.saturating_mul(p) <= n {
        if n % p == 0 {
            let mut e = 0;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            factors.push((p, e));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}
