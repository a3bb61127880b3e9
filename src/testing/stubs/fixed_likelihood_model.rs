use crate::classifiers::bayes::BernoulliStatistics;
use crate::classifiers::{ClassStatistics, Likelihood, LikelihoodModel, ModelKind};
use crate::error::NaiveBayesError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a preset likelihood per class, ignoring the query.
///
/// Classes are told apart by the `training_rows` of the placeholder
/// statistics handed out by [`FixedLikelihoodModel::statistics`].
pub struct FixedLikelihoodModel {
    likelihoods: Vec<Likelihood>,
    score_calls: Arc<AtomicUsize>,
}

impl FixedLikelihoodModel {
    pub fn direct(values: Vec<f64>) -> Self {
        Self {
            likelihoods: values.into_iter().map(Likelihood::Direct).collect(),
            score_calls: Arc::default(),
        }
    }

    pub fn log(values: Vec<f64>) -> Self {
        Self {
            likelihoods: values.into_iter().map(Likelihood::Log).collect(),
            score_calls: Arc::default(),
        }
    }

    /// Shared count of `score` calls, readable after the model is boxed.
    pub fn score_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.score_calls)
    }

    pub fn statistics(&self) -> Vec<ClassStatistics> {
        (0..self.likelihoods.len())
            .map(|i| {
                ClassStatistics::Bernoulli(BernoulliStatistics {
                    training_rows: i,
                    presence_counts: Vec::new(),
                    presence_probabilities: Vec::new(),
                })
            })
            .collect()
    }
}

impl LikelihoodModel for FixedLikelihoodModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Bernoulli
    }

    fn fit_class(
        &self,
        _rows: &[&[f64]],
        _number_of_features: usize,
    ) -> Result<ClassStatistics, NaiveBayesError> {
        Err(NaiveBayesError::Configuration(
            "fixed likelihood model cannot be fitted".into(),
        ))
    }

    fn score(
        &self,
        statistics: &ClassStatistics,
        _query: &[f64],
    ) -> Result<Likelihood, NaiveBayesError> {
        self.score_calls.fetch_add(1, Ordering::Relaxed);
        self.likelihoods
            .get(statistics.training_rows())
            .copied()
            .ok_or_else(|| NaiveBayesError::InvalidInput("unknown stub class".into()))
    }
}
