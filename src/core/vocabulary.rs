use crate::error::NaiveBayesError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed word list shared by every class of a multinomial model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new(words: Vec<String>) -> Result<Vocabulary, NaiveBayesError> {
        if words.is_empty() {
            return Err(NaiveBayesError::Configuration(
                "vocabulary must contain at least one word".into(),
            ));
        }
        for (i, w) in words.iter().enumerate() {
            if words[..i].contains(w) {
                return Err(NaiveBayesError::Configuration(format!(
                    "duplicate vocabulary word '{w}'"
                )));
            }
        }
        Ok(Vocabulary { words })
    }

    pub fn from_words(words: &[&str]) -> Result<Vocabulary, NaiveBayesError> {
        Vocabulary::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Re-checks the invariants of a vocabulary that came in through serde.
    pub fn validate(&self) -> Result<(), NaiveBayesError> {
        Vocabulary::new(self.words.clone()).map(|_| ())
    }
}
