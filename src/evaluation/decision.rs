use crate::error::NaiveBayesError;
use crate::evaluation::Posterior;
use crate::utils::math::argmax;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub class_index: usize,
    pub label: String,
    pub probability: f64,
    /// Second-highest posterior, 0 when there is a single class.
    pub runner_up_probability: f64,
    /// `(p_max − p_second) / p_max`, within [0, 1].
    pub confidence: f64,
}

/// Chooses the most probable class.
///
/// Exact ties go to the class that comes first in header order.
pub fn decide(posterior: &Posterior) -> Result<Decision, NaiveBayesError> {
    let probabilities = posterior.probabilities();
    let best = argmax(probabilities).ok_or_else(|| {
        NaiveBayesError::DegeneratePosterior("no finite posterior to choose from".into())
    })?;

    let winner = probabilities[best];
    if !(winner > 0.0) {
        return Err(NaiveBayesError::DegeneratePosterior(
            "highest posterior is zero".into(),
        ));
    }

    let runner_up = probabilities
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != best)
        .map(|(_, &p)| p)
        .fold(0.0, f64::max);

    let confidence = ((winner - runner_up) / winner).clamp(0.0, 1.0);

    Ok(Decision {
        class_index: best,
        label: posterior.labels()[best].clone(),
        probability: winner,
        runner_up_probability: runner_up,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn posterior(probs: &[f64]) -> Posterior {
        let labels = (0..probs.len()).map(|i| format!("c{i}")).collect();
        Posterior::new(labels, probs.to_vec()).unwrap()
    }

    #[test]
    fn binary_confidence_matches_margin_over_winner() {
        let d = decide(&posterior(&[0.16 / 0.22, 0.06 / 0.22])).unwrap();
        assert_eq!(d.class_index, 0);
        assert_eq!(d.label, "c0");
        assert!(approx_eq(d.confidence, 0.625, EPS));
    }

    #[test]
    fn winner_can_be_any_position() {
        let d = decide(&posterior(&[0.2, 0.5, 0.3])).unwrap();
        assert_eq!(d.class_index, 1);
        assert!(approx_eq(d.runner_up_probability, 0.3, EPS));
        assert!(approx_eq(d.confidence, 0.4, EPS));
    }

    #[test]
    fn exact_tie_goes_to_first_class_with_zero_confidence() {
        let d = decide(&posterior(&[0.25, 0.375, 0.375])).unwrap();
        assert_eq!(d.class_index, 1);
        assert_eq!(d.confidence, 0.0);
    }

    #[test]
    fn confidence_approaches_one_as_winner_dominates() {
        let d = decide(&posterior(&[1e-12, 1.0 - 1e-12])).unwrap();
        assert!(d.confidence > 1.0 - 1e-9);
        assert!(d.confidence <= 1.0);
    }

    #[test]
    fn single_class_has_full_confidence() {
        let d = decide(&posterior(&[1.0])).unwrap();
        assert_eq!(d.runner_up_probability, 0.0);
        assert_eq!(d.confidence, 1.0);
    }
}
