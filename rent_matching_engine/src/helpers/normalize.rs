//! Canonicalization of free-text names and labels.
//!
//! Bank statement labels arrive upper-cased, re-accented, padded or truncated depending on which
//! bank produced them. All text comparisons in the engine run on the canonical form produced
//! here, so accents and casing never affect a score.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonicalize a string for comparison: trim, lower-case, strip diacritics and collapse runs of
/// whitespace into a single space. Empty input normalizes to the empty string.
///
/// Diacritics are removed by NFD-decomposing the text and dropping the combining marks, so
/// "Hervé" becomes "herve".
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The whitespace-separated tokens of an already-normalized string, sorted. Payers reorder the
/// words of a name freely ("Dupont Jean" vs "Jean Dupont"), so equality checks compare these
/// instead of the raw strings.
pub fn sorted_tokens(normalized: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

#[cfg(test)]
mod test {
    use rand::{distributions::Alphanumeric, Rng};

    use super::*;

    #[test]
    fn trims_casefolds_and_collapses_whitespace() {
        assert_eq!(normalize(" DUPONT "), "dupont");
        assert_eq!(normalize("Jean   -  Pierre\t Dupont"), "jean - pierre dupont");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Hervé Bézier"), "herve bezier");
        assert_eq!(normalize("SARL Ïlot Çédille"), "sarl ilot cedille");
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in [" DUPONT ", "Hervé Bézier", "VIR   SEPA Loyer", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn mini_fuzz() {
        for _ in 0..1000 {
            let s: String = rand::thread_rng().sample_iter(&Alphanumeric).take(24).map(char::from).collect();
            let once = normalize(&s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn sorted_tokens_ignores_word_order() {
        assert_eq!(sorted_tokens("dupont jean"), sorted_tokens("jean dupont"));
        assert_ne!(sorted_tokens("dupont jean"), sorted_tokens("jean dupond"));
    }
}
