pub mod classifiers;
pub mod core;
pub mod datasets;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::NaiveBayesError;
