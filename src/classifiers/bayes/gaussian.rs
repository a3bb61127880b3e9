use crate::classifiers::likelihood_model::{check_rows, wrong_statistics};
use crate::classifiers::{ClassStatistics, Likelihood, LikelihoodModel, ModelKind};
use crate::error::NaiveBayesError;
use crate::utils::math::gaussian_density;
use serde::Serialize;

/// Running mean and population variance (Welford).
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussianEstimator {
    weight_sum: f64,
    mean: f64,
    variance_sum: f64,
}

impl GaussianEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observation(&mut self, value: f64, weight: f64) {
        if !value.is_finite() || !(weight > 0.0) {
            return;
        }
        let last_mean = self.mean;
        self.weight_sum += weight;
        self.mean += weight * (value - last_mean) / self.weight_sum;
        self.variance_sum += weight * (value - last_mean) * (value - self.mean);
    }

    pub fn total_weight_observed(&self) -> f64 {
        self.weight_sum
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Divides by the observed weight, not weight − 1.
    pub fn population_variance(&self) -> f64 {
        if self.weight_sum > 0.0 {
            (self.variance_sum / self.weight_sum).max(0.0)
        } else {
            0.0
        }
    }

    pub fn population_std_dev(&self) -> f64 {
        self.population_variance().sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaussianStatistics {
    pub training_rows: usize,
    pub means: Vec<f64>,
    /// Standard deviations after the floor was applied.
    pub std_devs: Vec<f64>,
    /// Features whose computed deviation was zero and got the floor.
    pub floored: Vec<bool>,
}

impl GaussianStatistics {
    /// Normal density of every query feature under this class.
    pub fn feature_likelihoods(&self, query: &[f64]) -> Result<Vec<f64>, NaiveBayesError> {
        NaiveBayesError::check_len("query", self.means.len(), query.len())?;
        query
            .iter()
            .zip(self.means.iter().zip(&self.std_devs))
            .map(|(&x, (&mean, &std_dev))| {
                if !x.is_finite() {
                    return Err(NaiveBayesError::InvalidInput(format!(
                        "query value {x} is not finite"
                    )));
                }
                Ok(gaussian_density(x, mean, std_dev))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GaussianModel {
    std_floor: f64,
}

impl GaussianModel {
    pub fn new(std_floor: f64) -> Result<Self, NaiveBayesError> {
        if !std_floor.is_finite() || std_floor <= 0.0 {
            return Err(NaiveBayesError::Configuration(format!(
                "standard deviation floor must be a positive number, got {std_floor}"
            )));
        }
        Ok(Self { std_floor })
    }

    pub fn std_floor(&self) -> f64 {
        self.std_floor
    }
}

impl LikelihoodModel for GaussianModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Gaussian
    }

    fn fit_class(
        &self,
        rows: &[&[f64]],
        number_of_features: usize,
    ) -> Result<ClassStatistics, NaiveBayesError> {
        check_rows(rows, number_of_features)?;
        if rows.is_empty() {
            return Err(NaiveBayesError::InvalidInput(
                "cannot estimate a normal distribution for a class without training rows".into(),
            ));
        }

        let mut estimators = vec![GaussianEstimator::new(); number_of_features];
        for row in rows {
            for (est, &x) in estimators.iter_mut().zip(row.iter()) {
                if !x.is_finite() {
                    return Err(NaiveBayesError::InvalidInput(format!(
                        "training value {x} is not finite"
                    )));
                }
                est.add_observation(x, 1.0);
            }
        }

        let means = estimators.iter().map(GaussianEstimator::mean).collect();
        let mut std_devs = Vec::with_capacity(number_of_features);
        let mut floored = Vec::with_capacity(number_of_features);
        for est in &estimators {
            let sd = est.population_std_dev();
            if sd == 0.0 {
                std_devs.push(self.std_floor);
                floored.push(true);
            } else {
                std_devs.push(sd);
                floored.push(false);
            }
        }

        Ok(ClassStatistics::Gaussian(GaussianStatistics {
            training_rows: rows.len(),
            means,
            std_devs,
            floored,
        }))
    }

    fn score(
        &self,
        statistics: &ClassStatistics,
        query: &[f64],
    ) -> Result<Likelihood, NaiveBayesError> {
        let ClassStatistics::Gaussian(stats) = statistics else {
            return Err(wrong_statistics(self.kind(), statistics));
        };
        let terms = stats.feature_likelihoods(query)?;
        Ok(Likelihood::Direct(terms.iter().product()))
    }
}
