use crate::classifiers::ModelSpec;
use crate::datasets::Sample;
use crate::error::NaiveBayesError;
use crate::evaluation::Priors;

/// Presence of `free` and `win` in three spam and three ham emails.
pub fn spam_presence() -> Result<Sample, NaiveBayesError> {
    Sample::build(
        "Bernoulli Naive Bayes: spam filtering on word presence",
        "email",
        &["free", "win"],
        &["spam", "ham"],
        vec![
            vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
        ],
        vec![1.0, 0.0],
        ModelSpec::bernoulli(),
        Priors::Explicit(vec![0.5, 0.5]),
    )
}
