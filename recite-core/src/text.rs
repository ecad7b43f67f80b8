//! Character extraction helpers

use std::collections::HashSet;

use crate::domain::{CharacterClassifier, HanziClassifier};

/// Distinct ideographs of `text` in first-seen order
pub fn unique_ideographs(text: &str) -> Vec<char> {
    let classifier = HanziClassifier::new();
    let mut seen = HashSet::new();

    text.chars()
        .filter(|&ch| classifier.is_ideograph(ch))
        .filter(|&ch| seen.insert(ch))
        .collect()
}

/// Distinct non-whitespace characters of `text` in first-seen order
pub fn unique_characters(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();

    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .filter(|&ch| seen.insert(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ideographs() {
        assert_eq!(
            unique_ideographs("床前明月光，疑是地上霜。举头望明月"),
            "床前明月光疑是地上霜举头望".chars().collect::<Vec<_>>()
        );
        assert!(unique_ideographs("Hello, world! 123").is_empty());
        assert!(unique_ideographs("").is_empty());
    }

    #[test]
    fn test_unique_characters() {
        assert_eq!(unique_characters("你好 你。\n好!"), vec!['你', '好', '。', '!']);
    }
}
