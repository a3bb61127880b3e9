mod bernoulli;
mod gaussian;
mod multinomial;
pub mod naive_bayes;

pub use bernoulli::{BernoulliModel, BernoulliStatistics, smoothed_presence};
pub use gaussian::{GaussianEstimator, GaussianModel, GaussianStatistics};
pub use multinomial::{
    MAX_COUNT, MultinomialModel, MultinomialStatistics, WordTerm, smoothed_word_probability,
};
pub use naive_bayes::{NaiveBayes, fit_class_statistics, posterior};
