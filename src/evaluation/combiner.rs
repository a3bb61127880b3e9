use crate::classifiers::Likelihood;
use crate::error::NaiveBayesError;
use crate::evaluation::priors::validate_priors;
use crate::utils::math::log_sum_exp;
use serde::Serialize;
use tracing::trace;

/// Joint scores and their normalization for one query.
///
/// In log space `joint` holds `ln P(x|c) + ln P(c)` and `normalizer` is
/// `ln P(x)`; otherwise `joint` holds `P(x|c)·P(c)` and `normalizer` is `P(x)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    pub log_space: bool,
    pub joint: Vec<f64>,
    pub normalizer: f64,
    pub probabilities: Vec<f64>,
}

/// Picks the log path as soon as one likelihood is in log form.
pub fn combine(likelihoods: &[Likelihood], priors: &[f64]) -> Result<Combination, NaiveBayesError> {
    if likelihoods.iter().any(Likelihood::is_log) {
        let logs: Vec<f64> = likelihoods.iter().map(Likelihood::ln).collect();
        combine_log(&logs, priors)
    } else {
        let direct: Vec<f64> = likelihoods.iter().map(Likelihood::value).collect();
        combine_direct(&direct, priors)
    }
}

pub fn combine_direct(likelihoods: &[f64], priors: &[f64]) -> Result<Combination, NaiveBayesError> {
    validate_priors(priors, likelihoods.len())?;

    let joint: Vec<f64> = likelihoods
        .iter()
        .zip(priors)
        .map(|(l, p)| l * p)
        .collect();
    let total: f64 = joint.iter().sum();
    trace!(?joint, total, "combined likelihoods with priors");

    if !total.is_finite() || total <= 0.0 || joint.iter().any(|j| *j < 0.0) {
        return Err(NaiveBayesError::DegeneratePosterior(format!(
            "unnormalized posteriors sum to {total}"
        )));
    }

    let probabilities = joint.iter().map(|j| j / total).collect();
    Ok(Combination {
        log_space: false,
        joint,
        normalizer: total,
        probabilities,
    })
}

pub fn combine_log(log_likelihoods: &[f64], priors: &[f64]) -> Result<Combination, NaiveBayesError> {
    validate_priors(priors, log_likelihoods.len())?;

    let joint: Vec<f64> = log_likelihoods
        .iter()
        .zip(priors)
        .map(|(l, p)| l + p.ln())
        .collect();
    if joint.iter().any(|j| j.is_nan() || *j == f64::INFINITY) {
        return Err(NaiveBayesError::DegeneratePosterior(
            "log-posterior is not a number".into(),
        ));
    }

    let log_evidence = log_sum_exp(&joint);
    trace!(?joint, log_evidence, "combined log-likelihoods with priors");
    if !log_evidence.is_finite() {
        return Err(NaiveBayesError::DegeneratePosterior(
            "every class has zero posterior mass".into(),
        ));
    }

    let probabilities = joint.iter().map(|j| (j - log_evidence).exp()).collect();
    Ok(Combination {
        log_space: true,
        joint,
        normalizer: log_evidence,
        probabilities,
    })
}
