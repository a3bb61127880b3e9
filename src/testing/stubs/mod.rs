pub mod fixed_likelihood_model;

pub use fixed_likelihood_model::FixedLikelihoodModel;
