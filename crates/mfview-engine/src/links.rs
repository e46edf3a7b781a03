/// Produces hyperlinks to character pages.
pub trait CharacterLinker {
    /// Link to the character `number` of `modulus`; `kind` is the character family, e.g. `Dirichlet`.
    fn url_character(&self, kind: &str, modulus: u32, number: u32) -> String;
}

/// Produces number field knowls and pretty field names.
pub trait FieldKnowl {
    /// Knowl anchor for the field `label`, displayed as `name`
    fn display_knowl(&self, label: &str, name: &str) -> String;

    /// Human readable name for a field label
    fn pretty(&self, label: &str) -> String;
}

/// Links and knowls in the LMFDB URL scheme, rooted at `base_url`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LmfdbLinks {
    base_url: String,
}

impl LmfdbLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CharacterLinker for LmfdbLinks {
    fn url_character(&self, kind: &str, modulus: u32, number: u32) -> String {
        format!("{}/Character/{}/{}/{}", self.base_url, kind, modulus, number)
    }
}

impl FieldKnowl for LmfdbLinks {
    fn display_knowl(&self, label: &str, name: &str) -> String {
        format!(
            r#"<a title="{label} [nf.field.data]" knowl="nf.field.data" kwargs="label={label}">{name}</a>"#
        )
    }

    fn pretty(&self, label: &str) -> String {
        if label == "1.1.1.1" {
            return r"\(\Q\)".to_string();
        }
        match quadratic_radicand(label) {
            Some(d) => format!(r"\(\Q(\sqrt{{{}}})\)", d),
            None => label.to_string(),
        }
    }
}

/// Squarefree `d` with `K = Q(sqrt d)` for a quadratic field label `2.r.|D|.i`
fn quadratic_radicand(label: &str) -> Option<i64> {
    let parts: Vec<&str> = label.split('.').collect();
    let [degree, real_places, disc, _] = parts.as_slice() else {
        return None;
    };
    if *degree != "2" {
        return None;
    }

    let abs_disc: i64 = disc.parse().ok()?;
    let disc = match *real_places {
        "2" => abs_disc,
        "0" => -abs_disc,
        _ => return None,
    };
    if abs_disc == 0 {
        return None;
    }

    Some(if disc % 4 == 0 { disc / 4 } else { disc })
}
