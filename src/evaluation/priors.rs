use crate::core::Dataset;
use crate::error::NaiveBayesError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where class priors come from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "values", rename_all = "kebab-case")]
pub enum Priors {
    /// `n_class / n_total` over the training set.
    #[default]
    ClassFrequency,
    /// `1 / number_of_classes` for every class.
    Uniform,
    /// One value per class, in header class order.
    Explicit(Vec<f64>),
}

impl Priors {
    pub fn resolve(&self, dataset: &Dataset) -> Result<Vec<f64>, NaiveBayesError> {
        let k = dataset.number_of_classes();
        match self {
            Priors::ClassFrequency => {
                if dataset.is_empty() {
                    return Err(NaiveBayesError::InvalidInput(
                        "class-frequency priors need at least one training row".into(),
                    ));
                }
                let total = dataset.len() as f64;
                Ok(dataset
                    .class_counts()
                    .into_iter()
                    .map(|c| c as f64 / total)
                    .collect())
            }
            Priors::Uniform => Ok(vec![1.0 / k as f64; k]),
            Priors::Explicit(values) => {
                validate_priors(values, k)?;
                Ok(values.clone())
            }
        }
    }
}

/// Priors need one finite, non-negative value per class.
pub fn validate_priors(priors: &[f64], number_of_classes: usize) -> Result<(), NaiveBayesError> {
    NaiveBayesError::check_len("priors", number_of_classes, priors.len())?;
    if let Some(bad) = priors.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(NaiveBayesError::InvalidInput(format!(
            "prior {bad} is not a finite non-negative number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;
    use crate::testing::dummies::header_two_features;

    fn dataset(groups: Vec<Vec<Vec<f64>>>) -> Dataset {
        Dataset::from_class_groups(header_two_features(), groups).unwrap()
    }

    #[test]
    fn class_frequency_follows_counts() {
        let ds = dataset(vec![
            vec![vec![0.0, 0.0]],
            vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
        ]);
        assert_eq!(Priors::ClassFrequency.resolve(&ds).unwrap(), vec![0.25, 0.75]);
    }

    #[test]
    fn class_frequency_of_empty_dataset_is_invalid() {
        let ds = dataset(vec![vec![], vec![]]);
        assert!(matches!(
            Priors::ClassFrequency.resolve(&ds),
            Err(NaiveBayesError::InvalidInput(_))
        ));
        assert_eq!(Priors::Uniform.resolve(&ds).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn explicit_priors_are_validated() {
        let ds = dataset(vec![vec![], vec![]]);
        assert!(Priors::Explicit(vec![0.5]).resolve(&ds).is_err());
        assert!(Priors::Explicit(vec![0.5, -0.1]).resolve(&ds).is_err());
        assert!(Priors::Explicit(vec![0.5, f64::NAN]).resolve(&ds).is_err());
        assert_eq!(
            Priors::Explicit(vec![0.3, 0.7]).resolve(&ds).unwrap(),
            vec![0.3, 0.7]
        );
    }

    #[test]
    fn serde_shape() {
        let p: Priors = serde_json::from_str(r#"{"type":"explicit","values":[0.5,0.5]}"#).unwrap();
        assert_eq!(p, Priors::Explicit(vec![0.5, 0.5]));
        let p: Priors = serde_json::from_str(r#"{"type":"uniform"}"#).unwrap();
        assert_eq!(p, Priors::Uniform);
    }
}
