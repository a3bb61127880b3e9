use crate::core::{Dataset, DatasetHeader};
use std::sync::Arc;

/// Spam/ham presence flags for the words `free` and `win`.
pub fn spam_presence_dataset() -> Dataset {
    let header = Arc::new(
        DatasetHeader::new(
            "mail".into(),
            vec!["free".into(), "win".into()],
            vec!["spam".into(), "ham".into()],
        )
        .expect("static header is valid"),
    );
    Dataset::from_class_groups(
        header,
        vec![
            vec![vec![1.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
        ],
    )
    .expect("static dataset is valid")
}
