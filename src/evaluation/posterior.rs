use crate::error::NaiveBayesError;
use serde::Serialize;

/// Normalized probabilities sum to 1 within this bound.
const SUM_TOLERANCE: f64 = 1e-9;

/// Normalized class probabilities, in header class order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posterior {
    labels: Vec<String>,
    probabilities: Vec<f64>,
}

impl Posterior {
    pub fn new(labels: Vec<String>, probabilities: Vec<f64>) -> Result<Posterior, NaiveBayesError> {
        NaiveBayesError::check_len("posterior", labels.len(), probabilities.len())?;
        if labels.is_empty() {
            return Err(NaiveBayesError::InvalidInput(
                "posterior needs at least one class".into(),
            ));
        }
        if let Some(bad) = probabilities
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(NaiveBayesError::DegeneratePosterior(format!(
                "probability {bad} is outside [0, 1]"
            )));
        }
        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(NaiveBayesError::DegeneratePosterior(format!(
                "probabilities sum to {sum}"
            )));
        }
        Ok(Posterior {
            labels,
            probabilities,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn probability(&self, class_index: usize) -> Option<f64> {
        self.probabilities.get(class_index).copied()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.probabilities[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.probabilities.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["spam".into(), "ham".into()]
    }

    #[test]
    fn lookup_by_label_and_index() {
        let p = Posterior::new(labels(), vec![0.75, 0.25]).unwrap();
        assert_eq!(p.get("ham"), Some(0.25));
        assert_eq!(p.get("eggs"), None);
        assert_eq!(p.probability(0), Some(0.75));
        let pairs: Vec<_> = p.iter().collect();
        assert_eq!(pairs, vec![("spam", 0.75), ("ham", 0.25)]);
    }

    #[test]
    fn rejects_unnormalized_values() {
        assert!(Posterior::new(labels(), vec![0.5, 0.6]).is_err());
        assert!(Posterior::new(labels(), vec![1.5, -0.5]).is_err());
        assert!(Posterior::new(labels(), vec![f64::NAN, 1.0]).is_err());
        assert!(Posterior::new(labels(), vec![1.0]).is_err());
        assert!(Posterior::new(vec![], vec![]).is_err());
    }

    #[test]
    fn sum_must_be_one_within_tolerance() {
        assert!(Posterior::new(labels(), vec![0.7, 0.3 + 1e-7]).is_err());
        assert!(Posterior::new(labels(), vec![0.7, 0.3 - 1e-7]).is_err());
        assert!(Posterior::new(labels(), vec![0.7, 0.3 + 1e-12]).is_ok());
        let thirds = vec![1.0 / 3.0; 3];
        assert!(Posterior::new(vec!["a".into(), "b".into(), "c".into()], thirds).is_ok());
    }
}
