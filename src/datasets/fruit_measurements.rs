use crate::classifiers::ModelSpec;
use crate::datasets::Sample;
use crate::error::NaiveBayesError;
use crate::evaluation::Priors;

/// Weight (g) and sugar content (%) of four apples and four bananas.
pub fn fruit_measurements() -> Result<Sample, NaiveBayesError> {
    Sample::build(
        "Gaussian Naive Bayes: fruit from weight and sugar content",
        "fruit",
        &["weight", "sugar"],
        &["apple", "banana"],
        vec![
            vec![
                vec![150.0, 12.0],
                vec![160.0, 11.0],
                vec![170.0, 13.0],
                vec![155.0, 12.5],
            ],
            vec![
                vec![120.0, 18.0],
                vec![130.0, 19.0],
                vec![125.0, 17.5],
                vec![135.0, 18.5],
            ],
        ],
        vec![140.0, 15.0],
        ModelSpec::gaussian(),
        Priors::ClassFrequency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::ClassStatistics;

    #[test]
    fn class_means_and_equal_priors() {
        let out = fruit_measurements().unwrap().evaluate().unwrap();
        let ClassStatistics::Gaussian(apple) = &out.statistics[0] else {
            panic!("expected gaussian statistics");
        };
        assert!((apple.means[0] - 158.75).abs() < 1e-9);
        assert!((apple.means[1] - 12.125).abs() < 1e-9);
        assert_eq!(out.classes[0].prior, 0.5);
        assert_eq!(out.classes[1].prior, 0.5);
    }

    #[test]
    fn query_between_clusters_still_sums_to_one() {
        let out = fruit_measurements().unwrap().evaluate().unwrap();
        let sum: f64 = out.posterior.probabilities().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(out.decision.confidence >= 0.0 && out.decision.confidence <= 1.0);
    }

    #[test]
    fn clear_queries_go_to_their_cluster() {
        let s = fruit_measurements().unwrap();
        let apple = s.clone().with_query(vec![160.0, 12.0]).unwrap();
        assert_eq!(apple.evaluate().unwrap().decision.label, "apple");
        let banana = s.with_query(vec![127.0, 18.2]).unwrap();
        assert_eq!(banana.evaluate().unwrap().decision.label, "banana");
    }
}
