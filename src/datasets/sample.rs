use crate::classifiers::ModelSpec;
use crate::core::{Dataset, DatasetHeader};
use crate::error::NaiveBayesError;
use crate::evaluation::Priors;
use crate::tasks::{EvaluationOutcome, QueryEvaluation};
use std::sync::Arc;

/// A small labeled dataset bundled with the query and model it demonstrates.
#[derive(Debug, Clone)]
pub struct Sample {
    pub title: &'static str,
    pub dataset: Dataset,
    pub query: Vec<f64>,
    pub model: ModelSpec,
    pub priors: Priors,
}

impl Sample {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build(
        title: &'static str,
        relation: &str,
        features: &[&str],
        classes: &[&str],
        groups: Vec<Vec<Vec<f64>>>,
        query: Vec<f64>,
        model: ModelSpec,
        priors: Priors,
    ) -> Result<Sample, NaiveBayesError> {
        let header = DatasetHeader::new(
            relation.to_string(),
            features.iter().map(|f| f.to_string()).collect(),
            classes.iter().map(|c| c.to_string()).collect(),
        )?;
        let dataset = Dataset::from_class_groups(Arc::new(header), groups)?;
        dataset.check_query(&query)?;
        Ok(Sample {
            title,
            dataset,
            query,
            model,
            priors,
        })
    }

    pub fn with_query(mut self, query: Vec<f64>) -> Result<Sample, NaiveBayesError> {
        self.dataset.check_query(&query)?;
        self.query = query;
        Ok(self)
    }

    pub fn with_model(mut self, model: ModelSpec) -> Sample {
        self.model = model;
        self
    }

    pub fn with_priors(mut self, priors: Priors) -> Sample {
        self.priors = priors;
        self
    }

    pub fn evaluate(&self) -> Result<EvaluationOutcome, NaiveBayesError> {
        QueryEvaluation::new(&self.dataset, &self.model, &self.priors)?.evaluate(&self.query)
    }
}
