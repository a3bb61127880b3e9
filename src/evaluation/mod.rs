mod combiner;
mod decision;
mod posterior;
mod priors;

pub use combiner::{Combination, combine, combine_direct, combine_log};
pub use decision::{Decision, decide};
pub use posterior::Posterior;
pub use priors::{Priors, validate_priors};
