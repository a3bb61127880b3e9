use crate::classifiers::ModelSpec;
use crate::core::Vocabulary;
use crate::datasets::Sample;
use crate::error::NaiveBayesError;
use crate::evaluation::Priors;

pub const SPAM_VOCABULARY: [&str; 6] = ["free", "win", "money", "meeting", "project", "urgent"];

/// Word counts of three spam and three ham documents.
pub fn spam_word_counts() -> Result<Sample, NaiveBayesError> {
    let vocabulary = Vocabulary::from_words(&SPAM_VOCABULARY)?;
    Sample::build(
        "Multinomial Naive Bayes: text classification on word counts",
        "documents",
        &SPAM_VOCABULARY,
        &["spam", "ham"],
        vec![
            vec![
                vec![3.0, 2.0, 4.0, 0.0, 0.0, 1.0],
                vec![2.0, 1.0, 3.0, 0.0, 0.0, 0.0],
                vec![4.0, 3.0, 5.0, 0.0, 1.0, 2.0],
            ],
            vec![
                vec![0.0, 0.0, 1.0, 3.0, 2.0, 0.0],
                vec![1.0, 0.0, 0.0, 2.0, 3.0, 1.0],
                vec![0.0, 1.0, 0.0, 4.0, 3.0, 2.0],
            ],
        ],
        vec![2.0, 1.0, 3.0, 0.0, 0.0, 1.0],
        ModelSpec::multinomial(vocabulary),
        Priors::ClassFrequency,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::{ClassStatistics, Likelihood};

    #[test]
    fn spam_like_document_is_spam() {
        let out = spam_word_counts().unwrap().evaluate().unwrap();
        assert!(out.log_space);
        assert_eq!(out.decision.label, "spam");
        assert!(out.decision.confidence > 0.9);
        assert!(matches!(out.classes[0].likelihood, Likelihood::Log(_)));
    }

    #[test]
    fn ham_totals() {
        let out = spam_word_counts().unwrap().evaluate().unwrap();
        let ClassStatistics::Multinomial(ham) = &out.statistics[1] else {
            panic!("expected multinomial statistics");
        };
        assert_eq!(ham.word_counts, vec![1, 1, 1, 9, 8, 3]);
        assert_eq!(ham.total_words, 23);
        assert!((ham.probabilities[3] - 10.0 / 29.0).abs() < 1e-12);
    }

    #[test]
    fn empty_document_falls_back_to_priors() {
        let s = spam_word_counts().unwrap().with_query(vec![0.0; 6]).unwrap();
        let out = s.evaluate().unwrap();
        assert!((out.posterior.get("spam").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(out.decision.label, "spam");
        assert_eq!(out.decision.confidence, 0.0);
    }
}
