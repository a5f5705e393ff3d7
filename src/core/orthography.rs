// File: src/core/orthography.rs

/// Letter pairs that suffix substitution can leave behind, with their
/// correct spelling.
const REPLACEMENTS: [(&str, &str); 8] = [
    ("йа", "я"),
    ("йі", "ї"),
    ("йу", "ю"),
    ("йе", "є"),
    ("ьа", "я"),
    ("ьі", "і"),
    ("ьу", "ю"),
    ("ье", "є"),
];

/// Rewrites iotated and softened vowel pairs into their single letters.
pub fn fit_orthography(word: &str) -> String {
    let mut result = word.to_string();
    for (old, new) in REPLACEMENTS {
        if result.contains(old) {
            result = result.replace(old, new);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_iotated_pairs() {
        assert_eq!(fit_orthography("мрійа"), "мрія");
        assert_eq!(fit_orthography("крайі"), "краї");
        assert_eq!(fit_orthography("пісньу"), "пісню");
    }

    #[test]
    fn leaves_regular_words_alone() {
        assert_eq!(fit_orthography("сонце"), "сонце");
        assert_eq!(fit_orthography(""), "");
    }
}
