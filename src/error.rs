use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NaiveBayesError {
    #[error("shape mismatch in {context}: expected {expected} values, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate posterior: {0}")]
    DegeneratePosterior(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl NaiveBayesError {
    #[inline]
    pub fn check_len(
        context: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), NaiveBayesError> {
        if expected == found {
            Ok(())
        } else {
            Err(NaiveBayesError::ShapeMismatch {
                context,
                expected,
                found,
            })
        }
    }
}
