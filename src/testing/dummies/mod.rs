mod datasets;
mod headers;

pub use datasets::spam_presence_dataset;
pub use headers::header_two_features;
