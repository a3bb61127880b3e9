use crate::classifiers::{ClassStatistics, Likelihood, LikelihoodModel, ModelKind, ModelSpec};
use crate::core::{Dataset, DatasetHeader};
use crate::error::NaiveBayesError;
use crate::evaluation::{Combination, Decision, Posterior, Priors, combine, decide, validate_priors};
use std::sync::Arc;
use tracing::{debug, trace};

/// Summarizes every class of `dataset` under the model described by `spec`.
pub fn fit_class_statistics(
    dataset: &Dataset,
    spec: &ModelSpec,
) -> Result<Vec<ClassStatistics>, NaiveBayesError> {
    let model = spec.build()?;
    fit_with_model(model.as_ref(), dataset)
}

fn fit_with_model(
    model: &dyn LikelihoodModel,
    dataset: &Dataset,
) -> Result<Vec<ClassStatistics>, NaiveBayesError> {
    let k = dataset.number_of_features();
    (0..dataset.number_of_classes())
        .map(|c| {
            let rows = dataset.class_rows(c);
            let stats = model.fit_class(&rows, k)?;
            trace!(class = c, rows = rows.len(), ?stats, "fitted class statistics");
            Ok(stats)
        })
        .collect()
}

/// Scores `query` against every class and normalizes with `priors`.
pub fn posterior(
    model: &dyn LikelihoodModel,
    statistics: &[ClassStatistics],
    priors: &[f64],
    query: &[f64],
    class_labels: &[String],
) -> Result<Posterior, NaiveBayesError> {
    NaiveBayesError::check_len("class statistics", class_labels.len(), statistics.len())?;
    let combination = combine_query(model, statistics, priors, query)?;
    Posterior::new(class_labels.to_vec(), combination.probabilities)
}

fn score_all(
    model: &dyn LikelihoodModel,
    statistics: &[ClassStatistics],
    query: &[f64],
) -> Result<Vec<Likelihood>, NaiveBayesError> {
    statistics.iter().map(|s| model.score(s, query)).collect()
}

fn combine_query(
    model: &dyn LikelihoodModel,
    statistics: &[ClassStatistics],
    priors: &[f64],
    query: &[f64],
) -> Result<Combination, NaiveBayesError> {
    let likelihoods = score_all(model, statistics, query)?;
    combine(&likelihoods, priors)
}

/// Naive Bayes evaluator fitted once from a dataset.
///
/// Holds only immutable statistics, so any number of queries can be
/// evaluated against it independently.
pub struct NaiveBayes {
    header: Arc<DatasetHeader>,
    model: Box<dyn LikelihoodModel>,
    statistics: Vec<ClassStatistics>,
    priors: Vec<f64>,
}

impl NaiveBayes {
    pub fn fit(dataset: &Dataset, spec: &ModelSpec, priors: &Priors) -> Result<Self, NaiveBayesError> {
        let model = spec.build()?;
        let statistics = fit_with_model(model.as_ref(), dataset)?;
        let priors = priors.resolve(dataset)?;

        debug!(
            model = %model.kind(),
            relation = dataset.header().relation_name(),
            rows = dataset.len(),
            classes = dataset.number_of_classes(),
            ?priors,
            "fitted naive bayes evaluator"
        );

        Ok(Self {
            header: dataset.shared_header(),
            model,
            statistics,
            priors,
        })
    }

    /// Assembles an evaluator from statistics fitted elsewhere.
    pub fn from_statistics(
        header: Arc<DatasetHeader>,
        model: Box<dyn LikelihoodModel>,
        statistics: Vec<ClassStatistics>,
        priors: Vec<f64>,
    ) -> Result<Self, NaiveBayesError> {
        let k = header.number_of_classes();
        NaiveBayesError::check_len("class statistics", k, statistics.len())?;
        validate_priors(&priors, k)?;
        Ok(Self {
            header,
            model,
            statistics,
            priors,
        })
    }

    pub fn header(&self) -> &DatasetHeader {
        &self.header
    }

    pub fn model_kind(&self) -> ModelKind {
        self.model.kind()
    }

    pub fn class_statistics(&self) -> &[ClassStatistics] {
        &self.statistics
    }

    pub fn priors(&self) -> &[f64] {
        &self.priors
    }

    fn check_query(&self, query: &[f64]) -> Result<(), NaiveBayesError> {
        NaiveBayesError::check_len("query", self.header.number_of_features(), query.len())
    }

    pub fn likelihoods(&self, query: &[f64]) -> Result<Vec<Likelihood>, NaiveBayesError> {
        self.check_query(query)?;
        score_all(self.model.as_ref(), &self.statistics, query)
    }

    /// Joint scores, normalizer and probabilities for `query`.
    pub fn combination(&self, query: &[f64]) -> Result<Combination, NaiveBayesError> {
        let likelihoods = self.likelihoods(query)?;
        self.combine_likelihoods(&likelihoods)
    }

    /// Combines already scored class likelihoods with the fitted priors.
    pub fn combine_likelihoods(&self, likelihoods: &[Likelihood]) -> Result<Combination, NaiveBayesError> {
        NaiveBayesError::check_len("likelihoods", self.statistics.len(), likelihoods.len())?;
        combine(likelihoods, &self.priors)
    }

    pub fn posterior(&self, query: &[f64]) -> Result<Posterior, NaiveBayesError> {
        self.check_query(query)?;
        posterior(
            self.model.as_ref(),
            &self.statistics,
            &self.priors,
            query,
            &self.header.class_labels,
        )
    }

    pub fn classify(&self, query: &[f64]) -> Result<Decision, NaiveBayesError> {
        decide(&self.posterior(query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::testing::dummies::{header_two_features, spam_presence_dataset};
    use crate::testing::stubs::FixedLikelihoodModel;
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn bernoulli_spam_scenario() {
        let ds = spam_presence_dataset();
        let nb = NaiveBayes::fit(&ds, &ModelSpec::bernoulli(), &Priors::Explicit(vec![0.5, 0.5]))
            .unwrap();

        let c = nb.combination(&[1.0, 0.0]).unwrap();
        assert!(approx_eq(c.joint[0], 0.16, EPS));
        assert!(approx_eq(c.joint[1], 0.06, EPS));

        let p = nb.posterior(&[1.0, 0.0]).unwrap();
        assert!(approx_eq(p.get("spam").unwrap(), 0.727_272_727_3, 1e-9));
        assert!(approx_eq(p.get("ham").unwrap(), 0.272_727_272_7, 1e-9));

        let d = nb.classify(&[1.0, 0.0]).unwrap();
        assert_eq!(d.label, "spam");
        assert!(approx_eq(d.confidence, 0.625, EPS));
    }

    #[test]
    fn free_functions_match_the_evaluator() {
        let ds = spam_presence_dataset();
        let spec = ModelSpec::bernoulli();
        let stats = fit_class_statistics(&ds, &spec).unwrap();
        let model = spec.build().unwrap();
        let p = posterior(
            model.as_ref(),
            &stats,
            &[0.5, 0.5],
            &[0.0, 1.0],
            &ds.header().class_labels,
        )
        .unwrap();

        let nb = NaiveBayes::fit(&ds, &spec, &Priors::Uniform).unwrap();
        assert_eq!(nb.class_statistics(), stats.as_slice());
        assert_eq!(nb.posterior(&[0.0, 1.0]).unwrap(), p);
    }

    #[test]
    fn query_shape_is_checked_before_scoring() {
        let ds = spam_presence_dataset();
        let nb = NaiveBayes::fit(&ds, &ModelSpec::bernoulli(), &Priors::default()).unwrap();
        assert!(matches!(
            nb.classify(&[1.0]),
            Err(NaiveBayesError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            nb.classify(&[1.0, 0.0, 1.0]),
            Err(NaiveBayesError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn all_zero_multinomial_query_reduces_to_priors() {
        let header = Arc::new(
            DatasetHeader::new(
                "docs".into(),
                vec!["a".into(), "b".into(), "c".into()],
                vec!["x".into(), "y".into()],
            )
            .unwrap(),
        );
        let ds = Dataset::from_class_groups(
            header,
            vec![
                vec![vec![5.0, 0.0, 1.0]],
                vec![vec![0.0, 3.0, 0.0], vec![1.0, 1.0, 1.0], vec![0.0, 0.0, 2.0]],
            ],
        )
        .unwrap();
        let spec = ModelSpec::multinomial(Vocabulary::from_words(&["a", "b", "c"]).unwrap());
        let nb = NaiveBayes::fit(&ds, &spec, &Priors::ClassFrequency).unwrap();

        let likelihoods = nb.likelihoods(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(likelihoods, vec![Likelihood::Log(0.0), Likelihood::Log(0.0)]);

        let p = nb.posterior(&[0.0, 0.0, 0.0]).unwrap();
        assert!(approx_eq(p.get("x").unwrap(), 0.25, EPS));
        assert!(approx_eq(p.get("y").unwrap(), 0.75, EPS));
        assert_eq!(nb.classify(&[0.0, 0.0, 0.0]).unwrap().label, "y");
    }

    #[test]
    fn vocabulary_must_match_dataset_width_at_fit() {
        let ds = spam_presence_dataset();
        let spec = ModelSpec::multinomial(Vocabulary::from_words(&["a", "b", "c"]).unwrap());
        assert!(matches!(
            NaiveBayes::fit(&ds, &spec, &Priors::default()),
            Err(NaiveBayesError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn mismatched_statistics_count_is_rejected() {
        let model = FixedLikelihoodModel::direct(vec![0.5, 0.5]);
        let stats = model.statistics();
        let labels = vec!["only".to_string()];
        assert!(posterior(&model, &stats, &[1.0], &[1.0, 1.0], &labels).is_err());
    }

    #[test]
    fn stub_model_drives_the_combiner() {
        let model = FixedLikelihoodModel::direct(vec![0.0, 0.0]);
        let stats = model.statistics();
        let labels: Vec<String> = header_two_features().class_labels.clone();
        assert!(matches!(
            posterior(&model, &stats, &[0.5, 0.5], &[0.0, 0.0], &labels),
            Err(NaiveBayesError::DegeneratePosterior(_))
        ));

        let model = FixedLikelihoodModel::log(vec![-1000.0, -1001.0]);
        let stats = model.statistics();
        let p = posterior(&model, &stats, &[0.5, 0.5], &[0.0, 0.0], &labels).unwrap();
        assert!(p.probability(0).unwrap() > p.probability(1).unwrap());
    }

    #[test]
    fn evaluator_from_statistics_checks_shapes() {
        let model = FixedLikelihoodModel::direct(vec![0.2, 0.6]);
        let stats = model.statistics();

        let nb = NaiveBayes::from_statistics(
            header_two_features(),
            Box::new(model),
            stats.clone(),
            vec![0.5, 0.5],
        )
        .unwrap();
        let c = nb.combine_likelihoods(&[Likelihood::Direct(0.2), Likelihood::Direct(0.6)]).unwrap();
        assert!(approx_eq(c.probabilities[0], 0.25, EPS));
        assert!(matches!(
            nb.combine_likelihoods(&[Likelihood::Direct(0.2)]),
            Err(NaiveBayesError::ShapeMismatch { .. })
        ));

        let short = NaiveBayes::from_statistics(
            header_two_features(),
            Box::new(FixedLikelihoodModel::direct(vec![0.2])),
            stats[..1].to_vec(),
            vec![0.5, 0.5],
        );
        assert!(short.is_err());
        let bad_priors = NaiveBayes::from_statistics(
            header_two_features(),
            Box::new(FixedLikelihoodModel::direct(vec![0.2, 0.6])),
            stats,
            vec![0.5],
        );
        assert!(bad_priors.is_err());
    }

    #[test]
    fn evaluator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NaiveBayes>();
    }
}
