use mfview_algebra::{Polynomial, PowerSeries};

/// Typeset `sum_j (sum_i beta_i * eigseq[j][i]) q^j + O(q^prec)` with `prec = eigseq.len()`.
///
/// `beta_0 = 1`; the remaining generators render as `\beta_{i}`. Each nonzero
/// term is wrapped in its own `\( \)` chunk so a browser can break lines between
/// them. An empty sequence gives `O(1)`.
pub fn eigs_as_seqseq_to_qexp(eigseq: &[Vec<i64>]) -> String {
    let prec = eigseq.len();
    let Some(first) = eigseq.first() else {
        return "O(1)".to_string();
    };

    let generators: Vec<String> = (1..first.len()).map(|i| format!("beta{}", i)).collect();
    let names: Vec<&str> = generators.iter().map(String::as_str).collect();

    let mut s = String::new();
    for (j, coeffs) in eigseq.iter().enumerate() {
        let term = Polynomial::linear_combination(coeffs);
        if term.is_zero() {
            continue;
        }

        let mut latex = PowerSeries::monomial(term, j).latex("q", &names);
        if !s.is_empty() && !latex.starts_with('-') {
            latex.insert(0, '+');
        }
        s.push_str(r"\(");
        s.push_str(&latex);
        s.push_str(r"\)");
    }

    s.push_str(&format!(r"\(+O(q^{{{}}})\)", prec));
    s
}

/// Wrap `latex` in `\( \)` and break it into separate math chunks at every
/// top-level ` + ` / ` - `. `\left(` and `\right)` are flattened first since a
/// sized delimiter cannot span chunks.
pub fn split_on_pm(latex: &str) -> String {
    let body = latex
        .trim()
        .replace(r"\left(", "(")
        .replace(r"\right)", ")");

    let mut out = String::with_capacity(body.len() + 16);
    out.push_str(r"\( ");

    let mut depth = 0usize;
    let mut skip = 0usize;
    for (i, c) in body.char_indices() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        match c {
            '(' | '{' => depth += 1,
            ')' | '}' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => {
                let rest = &body[i..];
                if let Some(sign) = ["+", "-"]
                    .into_iter()
                    .find(|sign| rest.starts_with(&format!(" {} ", sign)))
                {
                    out.push_str(&format!(r" \) {} \( ", sign));
                    skip = 2;
                    continue;
                }
            }
            _ => {}
        }
        out.push(c);
    }

    out.push_str(r" \)");
    out
}
