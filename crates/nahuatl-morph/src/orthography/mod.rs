// Orthography normalization
//
// Nahuatl is written in several spelling traditions. The analyzer works on
// one normalized spelling in which every phoneme has a single grapheme
// (`k`, `s`, `z` for /ts/, `w`, `L` for /tl/, `j` for the saltillo). A
// converter maps text from some tradition into that spelling before any
// segmentation happens.

use std::sync::Arc;

use nahuatl_core::character::is_collapsible_consonant;

use crate::error::MorphError;

/// Converts text into the normalized spelling.
pub trait Orthography: Send + Sync {
    fn convert(&self, text: &str) -> String;
}

impl<T: Orthography + ?Sized> Orthography for Arc<T> {
    fn convert(&self, text: &str) -> String {
        (**self).convert(text)
    }
}

/// An orthography described by grapheme substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionOrthography {
    /// Whether the source spelling uses `c` for both /s/ and /k/.
    pub uses_c: bool,
    /// `(phoneme, graphemes)` pairs, applied in order. Every grapheme of a
    /// pair is replaced by the phoneme.
    pub substitutions: Vec<(String, Vec<String>)>,
}

impl SubstitutionOrthography {
    pub fn new<P, G>(uses_c: bool, substitutions: impl IntoIterator<Item = (P, G)>) -> Self
    where
        P: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let substitutions = substitutions
            .into_iter()
            .map(|(phoneme, graphemes)| {
                (
                    phoneme.into(),
                    graphemes.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self {
            uses_c,
            substitutions,
        }
    }

    /// Modern spelling: `h`, `qu`, `kw`/`ku`, `ts`/`tz`, `u`, `tl`.
    pub fn modern() -> Self {
        Self::new(
            false,
            [
                ("j", vec!["h"]),
                ("k", vec!["qu"]),
                ("q", vec!["kw", "ku"]),
                ("z", vec!["ts", "tz"]),
                ("w", vec!["u"]),
                ("L", vec!["tl"]),
            ],
        )
    }

    /// Classical spelling: `c`/`qu`, `z` for /s/, `hu`/`uh`, `tl`.
    pub fn classical() -> Self {
        Self::new(
            true,
            [
                ("k", vec!["qu"]),
                ("s", vec!["z"]),
                ("z", vec!["ts"]),
                ("w", vec!["hu", "uh", "u"]),
                ("L", vec!["tl"]),
            ],
        )
    }
}

impl Orthography for SubstitutionOrthography {
    fn convert(&self, text: &str) -> String {
        let mut text = text.to_lowercase();
        if self.uses_c {
            text = convert_c(&text);
        }
        for (phoneme, graphemes) in &self.substitutions {
            for grapheme in graphemes {
                if !grapheme.is_empty() {
                    text = text.replace(grapheme.as_str(), phoneme);
                }
            }
        }
        collapse_doubled_consonants(&text)
    }
}

/// Resolve `c` into `s` or `k`.
///
/// `c` before a front vowel is /s/, before `o` or `a` it is /k/. Then `cu`
/// is /kw/, `cz` is /s/, any other `c` is /k/, and `kh` (from `ch`) is
/// restored to `c`.
fn convert_c(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &ch) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        match (ch, next) {
            ('c', Some('i' | 'e')) => out.push('s'),
            ('c', Some('o' | 'a')) => out.push('k'),
            _ => out.push(ch),
        }
    }
    out.replace("cu", "q")
        .replace("cz", "s")
        .replace('c', "k")
        .replace("kh", "c")
}

/// Write doubled consonants single, scanning left to right. Pairs do not
/// overlap, so a tripled consonant keeps two letters.
fn collapse_doubled_consonants(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if is_collapsible_consonant(ch) && chars.peek() == Some(&ch) {
            chars.next();
        }
    }
    out
}

/// Look up a built-in orthography by name (`modern` or `classical`).
pub fn by_name(name: &str) -> Result<Arc<dyn Orthography>, MorphError> {
    match name {
        "modern" => Ok(Arc::new(SubstitutionOrthography::modern())),
        "classical" => Ok(Arc::new(SubstitutionOrthography::classical())),
        other => Err(MorphError::UnknownOrthography(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_spelling() {
        let modern = SubstitutionOrthography::modern();
        assert_eq!(modern.convert("Nikitta"), "nikita");
        assert_eq!(modern.convert("tlakatl"), "LakaL");
        assert_eq!(modern.convert("kuali"), "qali");
        assert_eq!(modern.convert("tsopelik"), "zopelik");
        assert_eq!(modern.convert("nehuatl"), "nejwaL");
    }

    #[test]
    fn modern_qu_becomes_k() {
        assert_eq!(SubstitutionOrthography::modern().convert("quitta"), "kita");
    }

    #[test]
    fn classical_c_spelling() {
        let classical = SubstitutionOrthography::classical();
        assert_eq!(classical.convert("calli"), "kali");
        assert_eq!(classical.convert("cihuatl"), "siwaL");
        assert_eq!(classical.convert("nicochi"), "nikochi");
        assert_eq!(classical.convert("cuahuitl"), "qawiL");
        assert_eq!(classical.convert("tzontli"), "zonLi");
    }

    #[test]
    fn classical_z_is_s() {
        assert_eq!(SubstitutionOrthography::classical().convert("zan"), "san");
    }

    #[test]
    fn c_before_consonant_is_k() {
        assert_eq!(convert_c("ictli"), "iktli");
        assert_eq!(convert_c("ac"), "ak");
    }

    #[test]
    fn ch_is_kept() {
        // "ch" first becomes "kh" and is then restored.
        assert_eq!(convert_c("chichi"), "chichi");
    }

    #[test]
    fn doubled_consonants_collapse_without_overlap() {
        assert_eq!(collapse_doubled_consonants("kalli"), "kali");
        assert_eq!(collapse_doubled_consonants("kkk"), "kk");
        assert_eq!(collapse_doubled_consonants("kkkk"), "kk");
        // Vowels and L are not collapsed.
        assert_eq!(collapse_doubled_consonants("aaLL"), "aaLL");
    }

    #[test]
    fn custom_substitutions_apply_in_order() {
        let ortho = SubstitutionOrthography::new(false, [("x", vec!["sh"]), ("s", vec!["x"])]);
        assert_eq!(ortho.convert("shal"), "sal");
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("modern").is_ok());
        assert!(by_name("classical").is_ok());
        match by_name("ipa") {
            Err(MorphError::UnknownOrthography(name)) => assert_eq!(name, "ipa"),
            _ => panic!("expected unknown orthography"),
        }
    }

    #[test]
    fn shared_orthography_converts() {
        let shared: Arc<dyn Orthography> = Arc::new(SubstitutionOrthography::modern());
        assert_eq!(shared.convert("tl"), "L");
    }
}
