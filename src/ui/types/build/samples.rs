use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{DemoChoice, RunConfig};
use nbtrace::classifiers::{GaussianParams, ModelSpec, MultinomialParams};
use nbtrace::datasets::{self, Sample};
use nbtrace::evaluation::Priors;

/// Loads the demonstration named by `choice` and applies its parameters.
pub fn build_demo(choice: &DemoChoice) -> Result<Sample, BuildError> {
    match choice {
        DemoChoice::SpamPresence(p) => {
            let sample = datasets::spam_presence()?;
            Ok(if p.balanced_priors {
                sample
            } else {
                sample.with_priors(Priors::ClassFrequency)
            })
        }
        DemoChoice::FruitMeasurements(p) => {
            if !(p.std_floor.is_finite() && p.std_floor > 0.0) {
                return Err(BuildError::InvalidParameter(format!(
                    "std_floor must be a positive number, got {}",
                    p.std_floor
                )));
            }
            let model = ModelSpec::Gaussian(GaussianParams {
                std_floor: p.std_floor,
            });
            Ok(datasets::fruit_measurements()?.with_model(model))
        }
        DemoChoice::SpamWordCounts(p) => {
            if !(p.alpha.is_finite() && p.alpha > 0.0) {
                return Err(BuildError::InvalidParameter(format!(
                    "alpha must be a positive number, got {}",
                    p.alpha
                )));
            }
            let sample = datasets::spam_word_counts()?;
            let vocabulary = match &sample.model {
                ModelSpec::Multinomial(m) => m.vocabulary.clone(),
                _ => None,
            };
            let model = ModelSpec::Multinomial(MultinomialParams {
                alpha: p.alpha,
                vocabulary,
            });
            Ok(sample.with_model(model))
        }
    }
}

pub fn build_sample(config: &RunConfig) -> Result<Sample, BuildError> {
    let sample = build_demo(&config.demo)?;
    match &config.query {
        Some(query) => Ok(sample.with_query(query.clone())?),
        None => Ok(sample),
    }
}
