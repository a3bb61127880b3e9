mod query_evaluation;

pub use query_evaluation::{ClassEvaluation, EvaluationOutcome, QueryEvaluation};
