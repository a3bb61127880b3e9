use crate::classifiers::{ClassStatistics, Likelihood, ModelKind};
use crate::error::NaiveBayesError;

/// Generative assumption behind a Naive Bayes evaluator.
///
/// `fit_class` summarizes the training rows of a single class; `score` turns
/// that summary and a query into the class-conditional likelihood.
pub trait LikelihoodModel: Send + Sync {
    fn kind(&self) -> ModelKind;

    /// `number_of_features` is passed separately so a class without rows can
    /// still be summarized.
    fn fit_class(
        &self,
        rows: &[&[f64]],
        number_of_features: usize,
    ) -> Result<ClassStatistics, NaiveBayesError>;

    fn score(
        &self,
        statistics: &ClassStatistics,
        query: &[f64],
    ) -> Result<Likelihood, NaiveBayesError>;
}

pub(crate) fn check_rows(rows: &[&[f64]], number_of_features: usize) -> Result<(), NaiveBayesError> {
    for row in rows {
        NaiveBayesError::check_len("training vector", number_of_features, row.len())?;
    }
    Ok(())
}

pub(crate) fn wrong_statistics(expected: ModelKind, found: &ClassStatistics) -> NaiveBayesError {
    NaiveBayesError::Configuration(format!(
        "{expected} model cannot score {} statistics",
        found.kind()
    ))
}
