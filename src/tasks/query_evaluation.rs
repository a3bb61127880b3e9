use crate::classifiers::{ClassStatistics, Likelihood, ModelKind, ModelSpec, NaiveBayes};
use crate::core::Dataset;
use crate::error::NaiveBayesError;
use crate::evaluation::{Decision, Posterior, Priors, decide};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassEvaluation {
    pub label: String,
    pub prior: f64,
    pub likelihood: Likelihood,
    /// Unnormalized posterior, a log value when the outcome is in log space.
    pub joint: f64,
    pub probability: f64,
}

/// Everything computed for one query, ready to be narrated or serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOutcome {
    pub relation: String,
    pub model: ModelKind,
    pub query: Vec<f64>,
    pub statistics: Vec<ClassStatistics>,
    pub classes: Vec<ClassEvaluation>,
    /// How the class priors were obtained.
    pub prior_source: Priors,
    pub log_space: bool,
    pub normalizer: f64,
    pub posterior: Posterior,
    pub decision: Decision,
}

/// Fits a [`NaiveBayes`] evaluator once and evaluates queries against it.
pub struct QueryEvaluation {
    evaluator: NaiveBayes,
    priors: Priors,
}

impl QueryEvaluation {
    pub fn new(dataset: &Dataset, spec: &ModelSpec, priors: &Priors) -> Result<Self, NaiveBayesError> {
        Ok(Self {
            evaluator: NaiveBayes::fit(dataset, spec, priors)?,
            priors: priors.clone(),
        })
    }

    /// Wraps an evaluator whose priors were resolved from `priors`.
    pub fn from_evaluator(evaluator: NaiveBayes, priors: Priors) -> Self {
        Self { evaluator, priors }
    }

    pub fn evaluator(&self) -> &NaiveBayes {
        &self.evaluator
    }

    pub fn evaluate(&self, query: &[f64]) -> Result<EvaluationOutcome, NaiveBayesError> {
        let nb = &self.evaluator;
        let likelihoods = nb.likelihoods(query)?;
        let combination = nb.combine_likelihoods(&likelihoods)?;
        let labels = &nb.header().class_labels;
        let posterior = Posterior::new(labels.clone(), combination.probabilities.clone())?;
        let decision = decide(&posterior)?;

        info!(
            relation = nb.header().relation_name(),
            model = %nb.model_kind(),
            decision = %decision.label,
            confidence = decision.confidence,
            "classified query"
        );

        let classes = labels
            .iter()
            .enumerate()
            .map(|(i, label)| ClassEvaluation {
                label: label.clone(),
                prior: nb.priors()[i],
                likelihood: likelihoods[i],
                joint: combination.joint[i],
                probability: combination.probabilities[i],
            })
            .collect();

        Ok(EvaluationOutcome {
            relation: nb.header().relation_name().to_string(),
            model: nb.model_kind(),
            query: query.to_vec(),
            statistics: nb.class_statistics().to_vec(),
            classes,
            prior_source: self.priors.clone(),
            log_space: combination.log_space,
            normalizer: combination.normalizer,
            posterior,
            decision,
        })
    }

    /// Evaluates each query on its own; one failure does not stop the rest.
    pub fn evaluate_all(
        &self,
        queries: &[Vec<f64>],
    ) -> Vec<Result<EvaluationOutcome, NaiveBayesError>> {
        queries.iter().map(|q| self.evaluate(q)).collect()
    }
}
