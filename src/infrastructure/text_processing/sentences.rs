use unicode_segmentation::UnicodeSegmentation;

/// Splits text on Unicode sentence boundaries, dropping blank pieces.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn sentence_words(sentence: &str) -> Vec<String> {
    sentence
        .unicode_words()
        .map(|word| word.to_lowercase())
        .collect()
}
