mod error;
mod samples;

pub use error::BuildError;

pub use samples::{build_demo, build_sample};
