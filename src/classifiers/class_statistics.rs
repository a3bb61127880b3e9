use crate::classifiers::ModelKind;
use crate::classifiers::bayes::{BernoulliStatistics, GaussianStatistics, MultinomialStatistics};
use serde::Serialize;

/// Per-class summary derived once from a class's training rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum ClassStatistics {
    Bernoulli(BernoulliStatistics),
    Gaussian(GaussianStatistics),
    Multinomial(MultinomialStatistics),
}

impl ClassStatistics {
    pub fn kind(&self) -> ModelKind {
        match self {
            ClassStatistics::Bernoulli(_) => ModelKind::Bernoulli,
            ClassStatistics::Gaussian(_) => ModelKind::Gaussian,
            ClassStatistics::Multinomial(_) => ModelKind::Multinomial,
        }
    }

    pub fn number_of_features(&self) -> usize {
        match self {
            ClassStatistics::Bernoulli(s) => s.presence_probabilities.len(),
            ClassStatistics::Gaussian(s) => s.means.len(),
            ClassStatistics::Multinomial(s) => s.probabilities.len(),
        }
    }

    pub fn training_rows(&self) -> usize {
        match self {
            ClassStatistics::Bernoulli(s) => s.training_rows,
            ClassStatistics::Gaussian(s) => s.training_rows,
            ClassStatistics::Multinomial(s) => s.training_rows,
        }
    }
}
