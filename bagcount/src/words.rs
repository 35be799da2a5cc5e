use log::debug;
use multibag::Bag;
use unicode_segmentation::UnicodeSegmentation;

/// Tunes how words are counted and reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Words occurring fewer times are left out of the report.
    pub min_count: usize,
    /// How many words to report, most frequent first. `None` reports all of them.
    pub top: Option<usize>,
    /// Fold case before counting, so `The` and `the` are the same word.
    pub lowercase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { min_count: 1, top: None, lowercase: false }
    }
}

/// Splits on Unicode word bounds, dropping whitespace and punctuation.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds().map(str::trim).filter(|s| s.chars().any(char::is_alphanumeric))
}

pub fn count_words(text: &str, config: &Config) -> Bag<String> {
    let words: Bag<String> = split_into_words(text)
        .map(|word| if config.lowercase { word.to_lowercase() } else { word.to_owned() })
        .collect();
    debug!("counted {} words, {} distinct", words.total_count(), words.unique_count());
    words
}

/// The most frequent words first, limited by [`Config::min_count`] and [`Config::top`].
pub fn report<'b>(words: &'b Bag<String>, config: &Config) -> Vec<(&'b String, usize)> {
    words
        .most_common()
        .into_iter()
        .filter(|&(_, count)| count >= config.min_count)
        .take(config.top.unwrap_or(usize::MAX))
        .collect()
}
