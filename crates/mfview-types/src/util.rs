/// Letter code for a 1-based orbit index: `1 -> "a"`, `26 -> "z"`, `27 -> "aa"`.
///
/// Bijective base-26, so there is no zero digit and no leading-zero ambiguity.
/// Returns `None` for index 0.
pub fn orbit_letter(index: u32) -> Option<String> {
    if index == 0 {
        return None;
    }

    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();

    Some(letters.into_iter().map(char::from).collect())
}

/// Inverse of [`orbit_letter`]. Rejects empty strings, non-lowercase input and overflow.
pub fn orbit_index(code: &str) -> Option<u32> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u32, |acc, b| {
        if !b.is_ascii_lowercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(u32::from(b - b'a') + 1)
    })
}

/// Plain-text character orbit label, e.g. `7.b` for level 7, orbit 2
pub fn char_orbit_label_plain(level: u32, orbit: u32) -> Option<String> {
    orbit_letter(orbit).map(|letters| format!("{}.{}", level, letters))
}
