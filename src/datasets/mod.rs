mod fruit_measurements;
mod sample;
mod spam_presence;
mod spam_word_counts;

pub use fruit_measurements::fruit_measurements;
pub use sample::Sample;
pub use spam_presence::spam_presence;
pub use spam_word_counts::{SPAM_VOCABULARY, spam_word_counts};
