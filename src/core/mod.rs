mod dataset;
mod header;
mod vocabulary;

pub use dataset::{Dataset, LabeledVector};
pub use header::DatasetHeader;
pub use vocabulary::Vocabulary;
