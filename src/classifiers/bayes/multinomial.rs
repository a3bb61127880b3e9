use crate::classifiers::likelihood_model::{check_rows, wrong_statistics};
use crate::classifiers::{ClassStatistics, Likelihood, LikelihoodModel, ModelKind};
use crate::core::Vocabulary;
use crate::error::NaiveBayesError;
use serde::Serialize;

/// Largest count accepted; every whole number up to 2^53 is exact in an `f64`.
pub const MAX_COUNT: u64 = 1 << 53;

#[inline]
fn as_count(value: f64, what: &str) -> Result<u64, NaiveBayesError> {
    if !(value.is_finite() && value >= 0.0 && value.fract() == 0.0) {
        return Err(NaiveBayesError::InvalidInput(format!(
            "{what} count {value} is not a non-negative whole number"
        )));
    }
    if value > MAX_COUNT as f64 {
        return Err(NaiveBayesError::InvalidInput(format!(
            "{what} count {value} exceeds the maximum of {MAX_COUNT}"
        )));
    }
    Ok(value as u64)
}

fn add_counts(a: u64, b: u64) -> Result<u64, NaiveBayesError> {
    a.checked_add(b)
        .filter(|&sum| sum <= MAX_COUNT)
        .ok_or_else(|| {
            NaiveBayesError::InvalidInput(format!(
                "word counts of a class exceed the maximum of {MAX_COUNT}"
            ))
        })
}

/// `(count + α) / (total + α·V)`
#[inline]
pub fn smoothed_word_probability(count: u64, total_words: u64, alpha: f64, vocabulary_size: usize) -> f64 {
    (count as f64 + alpha) / (total_words as f64 + alpha * vocabulary_size as f64)
}

/// One non-zero term of a multinomial log-likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordTerm {
    pub word_index: usize,
    pub count: u64,
    pub probability: f64,
    /// `count · ln(probability)`
    pub log_term: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultinomialStatistics {
    pub training_rows: usize,
    pub word_counts: Vec<u64>,
    pub total_words: u64,
    pub alpha: f64,
    pub probabilities: Vec<f64>,
}

impl MultinomialStatistics {
    /// Terms with a zero query count are skipped, since `0 · ln(p)` is taken as 0.
    pub fn word_terms(&self, query: &[f64]) -> Result<Vec<WordTerm>, NaiveBayesError> {
        NaiveBayesError::check_len("query", self.probabilities.len(), query.len())?;
        let mut terms = Vec::new();
        for (word_index, (&x, &probability)) in query.iter().zip(&self.probabilities).enumerate() {
            let count = as_count(x, "query")?;
            if count == 0 || probability <= 0.0 {
                continue;
            }
            terms.push(WordTerm {
                word_index,
                count,
                probability,
                log_term: count as f64 * probability.ln(),
            });
        }
        Ok(terms)
    }

    pub fn log_likelihood(&self, query: &[f64]) -> Result<f64, NaiveBayesError> {
        Ok(self.word_terms(query)?.iter().map(|t| t.log_term).sum())
    }
}

#[derive(Debug, Clone)]
pub struct MultinomialModel {
    alpha: f64,
    vocabulary: Vocabulary,
}

impl MultinomialModel {
    pub fn new(alpha: f64, vocabulary: Vocabulary) -> Result<Self, NaiveBayesError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(NaiveBayesError::Configuration(format!(
                "smoothing parameter alpha must be a positive number, got {alpha}"
            )));
        }
        Ok(Self { alpha, vocabulary })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl LikelihoodModel for MultinomialModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Multinomial
    }

    fn fit_class(
        &self,
        rows: &[&[f64]],
        number_of_features: usize,
    ) -> Result<ClassStatistics, NaiveBayesError> {
        let v = self.vocabulary.size();
        NaiveBayesError::check_len("vocabulary", v, number_of_features)?;
        check_rows(rows, v)?;

        let mut word_counts = vec![0u64; v];
        for row in rows {
            for (total, &x) in word_counts.iter_mut().zip(row.iter()) {
                *total = add_counts(*total, as_count(x, "training")?)?;
            }
        }
        let total_words = word_counts
            .iter()
            .try_fold(0u64, |acc, &c| add_counts(acc, c))?;
        let probabilities = word_counts
            .iter()
            .map(|&c| smoothed_word_probability(c, total_words, self.alpha, v))
            .collect();

        Ok(ClassStatistics::Multinomial(MultinomialStatistics {
            training_rows: rows.len(),
            word_counts,
            total_words,
            alpha: self.alpha,
            probabilities,
        }))
    }

    fn score(
        &self,
        statistics: &ClassStatistics,
        query: &[f64],
    ) -> Result<Likelihood, NaiveBayesError> {
        let ClassStatistics::Multinomial(stats) = statistics else {
            return Err(wrong_statistics(self.kind(), statistics));
        };
        NaiveBayesError::check_len("query", self.vocabulary.size(), query.len())?;
        Ok(Likelihood::Log(stats.log_likelihood(query)?))
    }
}
