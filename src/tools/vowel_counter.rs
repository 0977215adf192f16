//! vowel_counter - count of ASCII vowels in a text

use serde::Deserialize;

const VOWELS: &str = "aeiouAEIOU";

/// Parameters for vowel_counter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VowelCountParams {
    pub text: String,
}

/// Counts the number of vowels in a string
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelCounter;

impl VowelCounter {
    pub fn count_vowels(&self, params: &VowelCountParams) -> usize {
        params.text.chars().filter(|c| VOWELS.contains(*c)).count()
    }
}
