//! Collation helpers for sorting location names.

use std::cmp::Ordering;

/// Transliterates to ASCII and lower-cases (`Zürich` -> `zurich`).
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive, accent-insensitive ordering.
///
/// Folded keys decide first; strings that fold to the same key are ordered by
/// their lower-cased form so the result stays total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Zürich"), "zurich");
        assert_eq!(fold_key("ŁÓDŹ"), "lodz");
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut names = vec!["Zwolle", "Zürich", "Zagreb"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Zagreb", "Zürich", "Zwolle"]);
    }

    #[test]
    fn case_variants_compare_equal() {
        assert_eq!(locale_cmp("Amsterdam", "amsterdam"), Ordering::Equal);
        assert_eq!(locale_cmp("", "Berlin"), Ordering::Less);
    }
}
