use crate::classifiers::likelihood_model::{check_rows, wrong_statistics};
use crate::classifiers::{ClassStatistics, Likelihood, LikelihoodModel, ModelKind};
use crate::error::NaiveBayesError;
use serde::Serialize;

/// Add-one smoothed probability that a binary feature is present.
#[inline]
pub fn smoothed_presence(count: usize, n: usize) -> f64 {
    (count as f64 + 1.0) / (n as f64 + 2.0)
}

#[inline]
fn as_binary(value: f64, what: &str) -> Result<bool, NaiveBayesError> {
    if value == 1.0 {
        Ok(true)
    } else if value == 0.0 {
        Ok(false)
    } else {
        Err(NaiveBayesError::InvalidInput(format!(
            "{what} value {value} is not binary (expected 0 or 1)"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BernoulliStatistics {
    pub training_rows: usize,
    pub presence_counts: Vec<usize>,
    pub presence_probabilities: Vec<f64>,
}

impl BernoulliStatistics {
    /// `P(x_i | class)` for every feature of the query.
    pub fn feature_likelihoods(&self, query: &[f64]) -> Result<Vec<f64>, NaiveBayesError> {
        NaiveBayesError::check_len("query", self.presence_probabilities.len(), query.len())?;
        query
            .iter()
            .zip(&self.presence_probabilities)
            .map(|(&x, &p)| Ok(if as_binary(x, "query")? { p } else { 1.0 - p }))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BernoulliModel;

impl BernoulliModel {
    pub fn new() -> Self {
        BernoulliModel
    }
}

impl LikelihoodModel for BernoulliModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Bernoulli
    }

    fn fit_class(
        &self,
        rows: &[&[f64]],
        number_of_features: usize,
    ) -> Result<ClassStatistics, NaiveBayesError> {
        check_rows(rows, number_of_features)?;

        let mut presence_counts = vec![0usize; number_of_features];
        for row in rows {
            for (count, &x) in presence_counts.iter_mut().zip(row.iter()) {
                if as_binary(x, "training")? {
                    *count += 1;
                }
            }
        }

        let n = rows.len();
        let presence_probabilities = presence_counts
            .iter()
            .map(|&c| smoothed_presence(c, n))
            .collect();

        Ok(ClassStatistics::Bernoulli(BernoulliStatistics {
            training_rows: n,
            presence_counts,
            presence_probabilities,
        }))
    }

    fn score(
        &self,
        statistics: &ClassStatistics,
        query: &[f64],
    ) -> Result<Likelihood, NaiveBayesError> {
        let ClassStatistics::Bernoulli(stats) = statistics else {
            return Err(wrong_statistics(self.kind(), statistics));
        };
        let terms = stats.feature_likelihoods(query)?;
        Ok(Likelihood::Direct(terms.iter().product()))
    }
}
