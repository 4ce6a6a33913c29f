// src/text.rs
// =============================================================================
// This module post-processes page text for the word report.
//
// It plays no part in crawling or admission - the crawl records raw
// paragraph text, and this turns it into a clean word list:
// 1. Split on anything that isn't a letter
// 2. Lowercase
// 3. Drop stopwords ("the", "and", ...) and single characters
//
// The stopword list is the usual English function words, inlined so the
// binary has no data files to carry around.
// =============================================================================

// Common English stopwords, lowercase
const STOPWORDS: [&str; 60] = [
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "do", "for", "from", "had", "has", "have", "he", "her", "his",
    "if", "in", "into", "is", "it", "its", "may", "more", "no", "not", "of", "on", "one", "or",
    "other", "our", "out", "she", "so", "some", "such", "than", "that", "the", "their", "there",
    "they", "this", "to", "was", "we", "were", "will", "with",
];

// Tokenizes text into lowercase words with stopwords removed.
//
// Example:
//   clean_words("The City of Chicago") -> ["city", "chicago"]
pub fn clean_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| word.len() > 1)
        .map(|word| word.to_lowercase())
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
        .collect()
}
