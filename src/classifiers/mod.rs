pub mod bayes;
mod class_statistics;
mod likelihood;
mod likelihood_model;
mod model_spec;

pub use bayes::NaiveBayes;
pub use class_statistics::ClassStatistics;
pub use likelihood::Likelihood;
pub use likelihood_model::LikelihoodModel;
pub use model_spec::{
    DEFAULT_ALPHA, DEFAULT_STD_FLOOR, GaussianParams, ModelKind, ModelSpec, MultinomialParams,
    NoModelParams,
};
